//! Database lifecycle: CREATE DATABASE, USE, DROP DATABASE, LIST, EXIT

use crate::engine::executor::{ExecutionContext, ExecutionResult};
use crate::error::{Action, During, Result, SqlterpError};
use crate::session::Session;

pub fn create_database(
    name: &str,
    ctx: &ExecutionContext<'_>,
    session: &mut Session,
) -> Result<ExecutionResult> {
    session.close();
    ctx.store.create(name).during(Action::CreatingDatabase)?;
    session.select(name);
    Ok(ExecutionResult::message(format!(
        "Database {} created and selected",
        name
    )))
}

/// Select `name`. An unknown name is not rejected: connecting creates an
/// empty database under that name.
pub fn use_database(
    name: &str,
    ctx: &ExecutionContext<'_>,
    session: &mut Session,
) -> Result<ExecutionResult> {
    drop(ctx.store.connect(name).during(Action::UsingDatabase)?);
    session.select(name);
    Ok(ExecutionResult::message(format!("Using database {}", name)))
}

pub fn drop_database(
    name: &str,
    ctx: &ExecutionContext<'_>,
    session: &mut Session,
) -> Result<ExecutionResult> {
    session.close_if_selected(name);
    if !ctx.store.exists(name) {
        return Err(SqlterpError::Missing {
            action: Action::DroppingDatabase,
            what: format!("database {}", name),
        });
    }
    ctx.store.remove(name).during(Action::DroppingDatabase)?;
    Ok(ExecutionResult::message(format!(
        "Database {} dropped successfully",
        name
    )))
}

pub fn list_databases(ctx: &ExecutionContext<'_>) -> Result<ExecutionResult> {
    let names = ctx.store.list().during(Action::ListingDatabases)?;
    if names.is_empty() {
        return Ok(ExecutionResult::message("No databases found"));
    }
    Ok(ExecutionResult::message(names.join("\n")))
}

pub fn exit(session: &mut Session) -> ExecutionResult {
    match session.close() {
        Some(_) => ExecutionResult::message("Connection closed"),
        None => ExecutionResult::message("No open connection"),
    }
}
