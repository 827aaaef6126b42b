//! Command executor

use crate::engine::handlers::{catalog, database, exchange, snapshot, table};
use crate::error::Result;
use crate::parser::Command;
use crate::session::Session;
use crate::storage::{ResultSet, StatementBuilder, Store};

/// What a handler needs besides the session
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub store: &'a Store,
    pub statements: &'a dyn StatementBuilder,
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub data: ResultData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultData {
    /// Status text
    Message(String),
    /// Tabular payload, rendered by the formatter
    Rows(ResultSet),
}

impl ExecutionResult {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            data: ResultData::Message(text.into()),
        }
    }

    pub fn rows(rows: ResultSet) -> Self {
        Self {
            data: ResultData::Rows(rows),
        }
    }
}

/// Route a classified command to its handler
pub fn execute_command(
    cmd: &Command,
    ctx: &ExecutionContext<'_>,
    session: &mut Session,
) -> Result<ExecutionResult> {
    match cmd {
        Command::CreateDatabase { name } => database::create_database(name, ctx, session),
        Command::Use { name } => database::use_database(name, ctx, session),
        Command::DropDatabase { name } => database::drop_database(name, ctx, session),
        Command::List => database::list_databases(ctx),
        Command::Exit => Ok(database::exit(session)),

        Command::CreateTable { sql } => table::create_table(sql, ctx, session),
        Command::Insert { sql } => table::insert(sql, ctx, session),
        Command::Select { sql } => table::select(sql, ctx, session),
        Command::Update { sql } => table::update(sql, ctx, session),
        Command::Delete { sql } => table::delete(sql, ctx, session),
        Command::DropTable { name } => table::drop_table(name, ctx, session),

        Command::ShowTables => catalog::list_tables(ctx, session),
        Command::Describe { table } => catalog::describe_table(table, ctx, session),

        Command::Export { table, file } => exchange::export_table_to_csv(table, file, ctx, session),
        Command::Import { table, file } => {
            exchange::import_table_from_csv(table, file, ctx, session)
        }

        Command::Backup { name } => snapshot::backup_database(name, ctx),
        Command::Restore { name } => snapshot::restore_database(name, ctx),
    }
}
