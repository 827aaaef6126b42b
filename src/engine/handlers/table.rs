//! Table DDL and DML: statements typed by the user go to the engine verbatim

use crate::engine::executor::{ExecutionContext, ExecutionResult};
use crate::error::{Action, During, Result};
use crate::session::Session;
use crate::storage::store::prepare_single;
use crate::storage::{CellValue, ResultSet, ScopedConnection};

/// Execute `sql` against the selected database and commit
fn execute_write(
    sql: &str,
    action: Action,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<()> {
    let mut conn = session.acquire(ctx.store, action)?;
    conn.execute_and_commit(sql).during(action)?;
    Ok(())
}

pub fn create_table(
    sql: &str,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<ExecutionResult> {
    execute_write(sql, Action::CreatingTable, ctx, session)?;
    Ok(ExecutionResult::message("Table created successfully"))
}

pub fn insert(sql: &str, ctx: &ExecutionContext<'_>, session: &Session) -> Result<ExecutionResult> {
    execute_write(sql, Action::InsertingIntoTable, ctx, session)?;
    Ok(ExecutionResult::message("Record inserted successfully"))
}

pub fn update(sql: &str, ctx: &ExecutionContext<'_>, session: &Session) -> Result<ExecutionResult> {
    execute_write(sql, Action::UpdatingTable, ctx, session)?;
    Ok(ExecutionResult::message("Table updated successfully"))
}

pub fn delete(sql: &str, ctx: &ExecutionContext<'_>, session: &Session) -> Result<ExecutionResult> {
    execute_write(sql, Action::DeletingFromTable, ctx, session)?;
    Ok(ExecutionResult::message("Records deleted successfully"))
}

pub fn drop_table(
    name: &str,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<ExecutionResult> {
    let sql = ctx.statements.drop_table(name);
    execute_write(&sql, Action::DroppingTable, ctx, session)?;
    Ok(ExecutionResult::message(format!(
        "Table {} dropped successfully",
        name
    )))
}

pub fn select(sql: &str, ctx: &ExecutionContext<'_>, session: &Session) -> Result<ExecutionResult> {
    let conn = session.acquire(ctx.store, Action::SelectingFromTable)?;
    let rows = query_all(&conn, sql).during(Action::SelectingFromTable)?;
    Ok(ExecutionResult::rows(rows))
}

/// Run a query and materialize every column and row
pub(crate) fn query_all(conn: &ScopedConnection, sql: &str) -> rusqlite::Result<ResultSet> {
    let mut stmt = prepare_single(conn, sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([])?;
    while let Some(row) = cursor.next()? {
        let mut cells = Vec::with_capacity(width);
        for idx in 0..width {
            cells.push(CellValue::from(row.get_ref(idx)?));
        }
        rows.push(cells);
    }

    Ok(ResultSet::new(columns, rows))
}
