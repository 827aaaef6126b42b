//! Classified command definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A command ready to be handed to the executor.
///
/// Variants that forward statement text carry the full trimmed input,
/// keyword included, exactly as the engine should receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    CreateDatabase { name: String },
    CreateTable { sql: String },
    Use { name: String },
    DropDatabase { name: String },
    DropTable { name: String },
    Insert { sql: String },
    Select { sql: String },
    Update { sql: String },
    Delete { sql: String },
    List,
    ShowTables,
    Describe { table: String },
    Export { table: String, file: String },
    Import { table: String, file: String },
    Backup { name: String },
    Restore { name: String },
    Exit,
}

impl Command {
    /// Keyword used when recording this command in the activity log
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::CreateDatabase { .. } => "CREATE DATABASE",
            Command::CreateTable { .. } => "CREATE TABLE",
            Command::Use { .. } => "USE",
            Command::DropDatabase { .. } => "DROP DATABASE",
            Command::DropTable { .. } => "DROP TABLE",
            Command::Insert { .. } => "INSERT",
            Command::Select { .. } => "SELECT",
            Command::Update { .. } => "UPDATE",
            Command::Delete { .. } => "DELETE",
            Command::List => "LIST",
            Command::ShowTables => "SHOW TABLES",
            Command::Describe { .. } => "DESCRIBE",
            Command::Export { .. } => "EXPORT",
            Command::Import { .. } => "IMPORT",
            Command::Backup { .. } => "BACKUP",
            Command::Restore { .. } => "RESTORE",
            Command::Exit => "EXIT",
        }
    }
}

/// Input that could not be dispatched to a handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// Input was empty or whitespace only
    NoCommand,
    /// Known verb with a missing or wrong sub-verb or operand
    Invalid(String),
    /// First token is not a known verb
    Unknown,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoCommand => write!(f, "No command provided"),
            Diagnostic::Invalid(verb) => write!(f, "Invalid {} command", verb),
            Diagnostic::Unknown => write!(f, "Unknown command"),
        }
    }
}

/// Outcome of classifying one line of input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classified {
    Command(Command),
    Diagnostic(Diagnostic),
}

impl Classified {
    pub fn keyword(&self) -> &'static str {
        match self {
            Classified::Command(cmd) => cmd.keyword(),
            Classified::Diagnostic(_) => "-",
        }
    }
}
