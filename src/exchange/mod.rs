//! CSV exchange format

pub mod csv;

pub use self::csv::{read_csv, write_csv, CsvTable};
