//! Error types for sqlterp

use std::fmt;

use thiserror::Error;

/// The operation that was in progress when a handler failed.
///
/// Rendered in lower case so failures read as `Error creating table: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatingDatabase,
    UsingDatabase,
    DroppingDatabase,
    CreatingTable,
    InsertingIntoTable,
    SelectingFromTable,
    UpdatingTable,
    DeletingFromTable,
    DroppingTable,
    ListingDatabases,
    ListingTables,
    DescribingTable,
    ExportingTable,
    ImportingTable,
    BackingUpDatabase,
    RestoringDatabase,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::CreatingDatabase => "creating database",
            Action::UsingDatabase => "using database",
            Action::DroppingDatabase => "dropping database",
            Action::CreatingTable => "creating table",
            Action::InsertingIntoTable => "inserting into table",
            Action::SelectingFromTable => "selecting from table",
            Action::UpdatingTable => "updating table",
            Action::DeletingFromTable => "deleting from table",
            Action::DroppingTable => "dropping table",
            Action::ListingDatabases => "listing databases",
            Action::ListingTables => "listing tables",
            Action::DescribingTable => "describing table",
            Action::ExportingTable => "exporting table",
            Action::ImportingTable => "importing table",
            Action::BackingUpDatabase => "backing up database",
            Action::RestoringDatabase => "restoring database",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum SqlterpError {
    #[error("No database selected")]
    NoDatabaseSelected,

    #[error("Error {action}: {source}")]
    Storage {
        action: Action,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Error {action}: {source}")]
    Io {
        action: Action,
        #[source]
        source: std::io::Error,
    },

    #[error("Error {action}: {message}")]
    Malformed { action: Action, message: String },

    #[error("Error {action}: {what} not found")]
    Missing { action: Action, what: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SqlterpError>;

/// Tags a storage or filesystem failure with the operation it interrupted.
pub trait During<T> {
    fn during(self, action: Action) -> Result<T>;
}

impl<T> During<T> for std::result::Result<T, rusqlite::Error> {
    fn during(self, action: Action) -> Result<T> {
        self.map_err(|source| SqlterpError::Storage { action, source })
    }
}

impl<T> During<T> for std::result::Result<T, std::io::Error> {
    fn during(self, action: Action) -> Result<T> {
        self.map_err(|source| SqlterpError::Io { action, source })
    }
}
