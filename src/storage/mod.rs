//! Storage layer: backing files, scoped engine connections and the
//! statement construction seam.

pub mod statements;
pub mod store;
pub mod value;

pub use statements::{Interpolated, StatementBuilder};
pub use store::{ScopedConnection, Store, BACKUP_SUFFIX, DATABASE_EXTENSION};
pub use value::{CellValue, ResultSet};
