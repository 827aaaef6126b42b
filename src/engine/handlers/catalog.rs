//! Introspection: SHOW TABLES, DESCRIBE

use crate::engine::executor::{ExecutionContext, ExecutionResult};
use crate::engine::handlers::table::query_all;
use crate::error::{Action, During, Result};
use crate::session::Session;

pub fn list_tables(ctx: &ExecutionContext<'_>, session: &Session) -> Result<ExecutionResult> {
    let conn = session.acquire(ctx.store, Action::ListingTables)?;
    let result = query_all(&conn, &ctx.statements.list_tables()).during(Action::ListingTables)?;

    if result.is_empty() {
        return Ok(ExecutionResult::message(
            "No tables found in the current database",
        ));
    }

    let names: Vec<String> = result
        .rows
        .iter()
        .filter_map(|row| row.first().map(|cell| cell.to_string()))
        .collect();
    Ok(ExecutionResult::message(format!(
        "|Tables|\n{}",
        names.join("\n")
    )))
}

pub fn describe_table(
    table: &str,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<ExecutionResult> {
    let conn = session.acquire(ctx.store, Action::DescribingTable)?;
    let mut stmt = conn
        .prepare(&ctx.statements.table_info(table))
        .during(Action::DescribingTable)?;
    let columns: Vec<String> = stmt
        .query_map([], |row| {
            let name: String = row.get(1)?;
            let data_type: String = row.get(2)?;
            Ok(format!("{} ({})", name, data_type))
        })
        .during(Action::DescribingTable)?
        .collect::<rusqlite::Result<Vec<String>>>()
        .during(Action::DescribingTable)?;

    if columns.is_empty() {
        return Ok(ExecutionResult::message(format!(
            "No table named {} found",
            table
        )));
    }
    Ok(ExecutionResult::message(format!(
        "|Schema of {}|\n{}",
        table,
        columns.join("\n")
    )))
}
