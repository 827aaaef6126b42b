//! Output formatting module

pub mod formatter;
pub mod json;
pub mod table;

pub use formatter::{format_output, OutputFormat};
pub use table::{format_table, NO_RECORDS};
