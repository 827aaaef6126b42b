//! CSV exchange: EXPORT and IMPORT

use std::fs::{self, File};
use std::io::BufWriter;

use rusqlite::params_from_iter;

use crate::engine::executor::{ExecutionContext, ExecutionResult};
use crate::engine::handlers::table::query_all;
use crate::error::{Action, During, Result, SqlterpError};
use crate::exchange::{read_csv, write_csv};
use crate::session::Session;

pub fn export_table_to_csv(
    table: &str,
    file: &str,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<ExecutionResult> {
    let action = Action::ExportingTable;
    let conn = session.acquire(ctx.store, action)?;
    let result = query_all(&conn, &ctx.statements.select_all(table)).during(action)?;

    let mut writer = BufWriter::new(File::create(file).during(action)?);
    write_csv(&mut writer, &result).during(action)?;

    tracing::debug!(table, file, rows = result.row_count(), "exported table");
    Ok(ExecutionResult::message(format!(
        "Table {} exported to {}",
        table, file
    )))
}

/// Load `file` into `table`, creating it with TEXT columns if absent.
///
/// Rows are inserted positionally in one transaction; any failing row
/// rolls the whole import back.
pub fn import_table_from_csv(
    table: &str,
    file: &str,
    ctx: &ExecutionContext<'_>,
    session: &Session,
) -> Result<ExecutionResult> {
    let action = Action::ImportingTable;
    let mut conn = session.acquire(ctx.store, action)?;

    let content = fs::read_to_string(file).during(action)?;
    let csv = read_csv(&content)
        .map_err(|message| SqlterpError::Malformed { action, message })?
        .ok_or_else(|| SqlterpError::Malformed {
            action,
            message: format!("{} has no header row", file),
        })?;

    let tx = conn.transaction().during(action)?;
    tx.execute(&ctx.statements.create_text_table(table, &csv.header), [])
        .during(action)?;
    {
        let mut stmt = tx
            .prepare(&ctx.statements.insert_row(table, &csv.header))
            .during(action)?;
        for record in &csv.records {
            stmt.execute(params_from_iter(record.iter())).during(action)?;
        }
    }
    tx.commit().during(action)?;

    tracing::debug!(table, file, rows = csv.records.len(), "imported table");
    Ok(ExecutionResult::message(format!(
        "Table {} imported from {}",
        table, file
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::handlers::catalog::describe_table;
    use crate::engine::handlers::table::{create_table, insert, select};
    use crate::engine::handlers::testing::{connected_store, STATEMENTS};
    use crate::engine::executor::ResultData;
    use crate::output::format_output;

    fn row_count(ctx: &ExecutionContext<'_>, session: &Session, table: &str) -> usize {
        let out = select(&format!("SELECT * FROM {}", table), ctx, session).unwrap();
        match out.data {
            ResultData::Rows(rows) => rows.row_count(),
            ResultData::Message(m) => panic!("Expected rows, got {}", m),
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        create_table("CREATE TABLE items (id INTEGER, name TEXT)", &ctx, &session).unwrap();
        insert("INSERT INTO items VALUES (1,'pen')", &ctx, &session).unwrap();
        insert("INSERT INTO items VALUES (2,NULL)", &ctx, &session).unwrap();

        let path = dir.path().join("items.csv");
        let file = path.to_str().unwrap();
        let out = export_table_to_csv("items", file, &ctx, &session).unwrap();
        assert_eq!(format_output(&out), format!("Table items exported to {}", file));
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,name\n1,pen\n2,\n");
    }

    #[test]
    fn test_round_trip_preserves_rows_and_columns() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        create_table("CREATE TABLE items (id INTEGER, name TEXT)", &ctx, &session).unwrap();
        insert("INSERT INTO items VALUES (1,'pen')", &ctx, &session).unwrap();
        insert("INSERT INTO items VALUES (2,'a, b')", &ctx, &session).unwrap();

        let path = dir.path().join("items.csv");
        let file = path.to_str().unwrap();
        export_table_to_csv("items", file, &ctx, &session).unwrap();
        let out = import_table_from_csv("copy", file, &ctx, &session).unwrap();
        assert_eq!(format_output(&out), format!("Table copy imported from {}", file));

        assert_eq!(row_count(&ctx, &session, "copy"), 2);
        let schema = describe_table("copy", &ctx, &session).unwrap();
        assert_eq!(format_output(&schema), "|Schema of copy|\nid (TEXT)\nname (TEXT)");
    }

    #[test]
    fn test_import_into_existing_table_appends() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        create_table("CREATE TABLE items (id INTEGER, name TEXT)", &ctx, &session).unwrap();
        insert("INSERT INTO items VALUES (1,'pen')", &ctx, &session).unwrap();

        let path = dir.path().join("more.csv");
        fs::write(&path, "id,name\n2,ink\n3,cap\n").unwrap();
        import_table_from_csv("items", path.to_str().unwrap(), &ctx, &session).unwrap();

        assert_eq!(row_count(&ctx, &session, "items"), 3);
    }

    #[test]
    fn test_import_column_mismatch_rolls_back() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };

        let path = dir.path().join("bad.csv");
        fs::write(&path, "id,name\n1,pen\n2,ink,extra\n").unwrap();
        let err = import_table_from_csv("items", path.to_str().unwrap(), &ctx, &session)
            .unwrap_err();
        assert!(err.to_string().starts_with("Error importing table: "));

        let out = describe_table("items", &ctx, &session).unwrap();
        assert_eq!(format_output(&out), "No table named items found");
    }

    #[test]
    fn test_import_missing_file() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        let path = dir.path().join("nope.csv");
        let err = import_table_from_csv("items", path.to_str().unwrap(), &ctx, &session)
            .unwrap_err();
        assert!(err.to_string().starts_with("Error importing table: "));
    }

    #[test]
    fn test_import_empty_file() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        let err = import_table_from_csv("items", path.to_str().unwrap(), &ctx, &session)
            .unwrap_err();
        assert!(err.to_string().ends_with("has no header row"));
    }

    #[test]
    fn test_export_missing_table() {
        let (dir, store, session) = connected_store();
        let ctx = ExecutionContext { store: &store, statements: &STATEMENTS };
        let path = dir.path().join("out.csv");
        let err = export_table_to_csv("ghost", path.to_str().unwrap(), &ctx, &session)
            .unwrap_err();
        assert!(err.to_string().starts_with("Error exporting table: "));
        assert!(!path.exists());
    }
}
