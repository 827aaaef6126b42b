//! BACKUP and RESTORE: whole-file copies next to the live database.
//!
//! Neither checks for open connections; a restore under a connection that
//! is in use leaves that connection reading stale pages.

use crate::engine::executor::{ExecutionContext, ExecutionResult};
use crate::error::{Action, During, Result, SqlterpError};
use crate::storage::store::backup_file_name;

pub fn backup_database(name: &str, ctx: &ExecutionContext<'_>) -> Result<ExecutionResult> {
    let action = Action::BackingUpDatabase;
    if !ctx.store.exists(name) {
        return Err(SqlterpError::Missing {
            action,
            what: format!("database {}", name),
        });
    }
    ctx.store.backup(name).during(action)?;
    Ok(ExecutionResult::message(format!(
        "Database {} backed up as {}",
        name,
        backup_file_name(name)
    )))
}

pub fn restore_database(name: &str, ctx: &ExecutionContext<'_>) -> Result<ExecutionResult> {
    let action = Action::RestoringDatabase;
    if !ctx.store.has_backup(name) {
        return Err(SqlterpError::Missing {
            action,
            what: format!("backup {}", backup_file_name(name)),
        });
    }
    ctx.store.restore(name).during(action)?;
    Ok(ExecutionResult::message(format!(
        "Database {} restored from {}",
        name,
        backup_file_name(name)
    )))
}
