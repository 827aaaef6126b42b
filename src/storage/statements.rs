//! Statement construction seam
//!
//! Every statement the handlers build themselves (as opposed to statements
//! the user typed) comes from a [`StatementBuilder`]. Identifiers are
//! interpolated literally by [`Interpolated`]; a quoting implementation can
//! be swapped in through `Interpreter::with_statements`.

pub trait StatementBuilder: Send + Sync {
    fn drop_table(&self, table: &str) -> String;

    fn select_all(&self, table: &str) -> String;

    /// Column metadata query: rows of (cid, name, type, ...)
    fn table_info(&self, table: &str) -> String;

    /// Catalog query returning one table name per row
    fn list_tables(&self) -> String;

    /// Create `table` with every column typed as TEXT, unless it exists
    fn create_text_table(&self, table: &str, columns: &[String]) -> String;

    /// Positional insert with one placeholder per column
    fn insert_row(&self, table: &str, columns: &[String]) -> String;
}

/// Literal interpolation of caller-supplied names, no escaping
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpolated;

impl StatementBuilder for Interpolated {
    fn drop_table(&self, table: &str) -> String {
        format!("DROP TABLE {}", table)
    }

    fn select_all(&self, table: &str) -> String {
        format!("SELECT * FROM {}", table)
    }

    fn table_info(&self, table: &str) -> String {
        format!("PRAGMA table_info({})", table)
    }

    fn list_tables(&self) -> String {
        "SELECT name FROM sqlite_master WHERE type='table'".to_string()
    }

    fn create_text_table(&self, table: &str, columns: &[String]) -> String {
        let defs: Vec<String> = columns.iter().map(|c| format!("{} TEXT", c)).collect();
        format!("CREATE TABLE IF NOT EXISTS {} ({})", table, defs.join(", "))
    }

    fn insert_row(&self, table: &str, columns: &[String]) -> String {
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        )
    }
}
