//! The single `process(query) -> (session, result_text)` entrypoint

use crate::activity::{ActivityLog, ActivityRecord, Severity, TracingActivityLog};
use crate::config::Config;
use crate::engine::executor::{execute_command, ExecutionContext};
use crate::error::Result;
use crate::output::format_output;
use crate::parser::{classify, Classified};
use crate::session::Session;
use crate::storage::{Interpolated, StatementBuilder, Store};

/// One caller's session bound to a store.
///
/// Each caller (interactive loop, request handler, script) owns its own
/// interpreter; commands are processed one at a time through `&mut self`.
pub struct Interpreter {
    session: Session,
    store: Store,
    statements: Box<dyn StatementBuilder>,
    activity: Box<dyn ActivityLog>,
}

impl Interpreter {
    pub fn new(store: Store) -> Self {
        Self {
            session: Session::new(),
            store,
            statements: Box::new(Interpolated),
            activity: Box::new(TracingActivityLog),
        }
    }

    /// Open the configured data directory and log activity through `tracing`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Store::open(&config.data_dir)?))
    }

    pub fn with_activity_log(mut self, activity: impl ActivityLog + 'static) -> Self {
        self.activity = Box::new(activity);
        self
    }

    pub fn with_statements(mut self, statements: impl StatementBuilder + 'static) -> Self {
        self.statements = Box::new(statements);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Classify and run one command, record it, and return the result text.
    ///
    /// Never fails: every error becomes result text.
    pub fn process(&mut self, query: &str) -> (&Session, String) {
        let classified = classify(query);
        let (text, severity) = match &classified {
            Classified::Diagnostic(diagnostic) => (diagnostic.to_string(), Severity::Info),
            Classified::Command(cmd) => {
                let ctx = ExecutionContext {
                    store: &self.store,
                    statements: self.statements.as_ref(),
                };
                match execute_command(cmd, &ctx, &mut self.session) {
                    Ok(result) => (format_output(&result), Severity::Info),
                    Err(e) => (e.to_string(), Severity::Error),
                }
            }
        };

        self.activity
            .record(&ActivityRecord::new(classified.keyword(), text.as_str(), severity));
        (&self.session, text)
    }

    /// Close the session's connection without going through the classifier
    pub fn shutdown(&mut self) {
        if let Some(name) = self.session.close() {
            tracing::info!(database = %name, "session shut down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MemoryActivityLog;
    use crate::session::SessionState;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn interpreter() -> (TempDir, Interpreter, Arc<MemoryActivityLog>) {
        let temp_dir = TempDir::new().unwrap();
        let log = Arc::new(MemoryActivityLog::new());
        let interp = Interpreter::new(Store::open(temp_dir.path()).unwrap())
            .with_activity_log(log.clone());
        (temp_dir, interp, log)
    }

    fn run(interp: &mut Interpreter, query: &str) -> String {
        interp.process(query).1
    }

    #[test]
    fn test_shop_scenario() {
        let (_dir, mut interp, _log) = interpreter();

        assert_eq!(run(&mut interp, "CREATE DATABASE shop"), "Database shop created and selected");
        assert_eq!(
            run(&mut interp, "CREATE TABLE items (id INTEGER, name TEXT)"),
            "Table created successfully"
        );
        assert_eq!(
            run(&mut interp, "INSERT INTO items VALUES (1,'pen')"),
            "Record inserted successfully"
        );
        assert_eq!(
            run(&mut interp, "SELECT * FROM items"),
            "id | name\n---+-----\n1  | pen "
        );
    }

    #[test]
    fn test_process_returns_session() {
        let (_dir, mut interp, _log) = interpreter();
        let (session, _) = interp.process("USE shop");
        assert_eq!(session.state(), &SessionState::Connected("shop".to_string()));
        let (session, text) = interp.process("EXIT");
        assert_eq!(text, "Connection closed");
        assert_eq!(session.state(), &SessionState::Disconnected);
    }

    #[test]
    fn test_data_command_without_selection() {
        let (_dir, mut interp, log) = interpreter();
        assert_eq!(run(&mut interp, "SELECT * FROM items"), "No database selected");
        assert_eq!(log.records()[0].severity, Severity::Error);
    }

    #[test]
    fn test_every_command_is_logged_once() {
        let (_dir, mut interp, log) = interpreter();
        run(&mut interp, "");
        run(&mut interp, "FROBNICATE");
        run(&mut interp, "CREATE DATABASE shop");
        run(&mut interp, "DROP TABLE ghost");

        let records = log.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].message, "No command provided");
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[1].message, "Unknown command");
        assert_eq!(records[1].command, "-");
        assert_eq!(records[2].command, "CREATE DATABASE");
        assert_eq!(records[2].severity, Severity::Info);
        assert_eq!(records[3].command, "DROP TABLE");
        assert_eq!(records[3].severity, Severity::Error);
        assert!(records[3].message.starts_with("Error dropping table: "));
    }

    #[test]
    fn test_use_switches_between_databases() {
        let (_dir, mut interp, _log) = interpreter();
        run(&mut interp, "CREATE DATABASE a");
        run(&mut interp, "CREATE TABLE only_in_a (x INTEGER)");
        run(&mut interp, "CREATE DATABASE b");
        assert_eq!(run(&mut interp, "SHOW TABLES"), "No tables found in the current database");
        run(&mut interp, "USE a");
        assert_eq!(run(&mut interp, "SHOW TABLES"), "|Tables|\nonly_in_a");
    }

    #[test]
    fn test_list_after_create() {
        let (_dir, mut interp, _log) = interpreter();
        run(&mut interp, "CREATE DATABASE shop");
        run(&mut interp, "BACKUP shop");
        assert_eq!(run(&mut interp, "LIST"), "shop");
    }

    #[test]
    fn test_shutdown_closes_connection() {
        let (_dir, mut interp, _log) = interpreter();
        run(&mut interp, "USE shop");
        interp.shutdown();
        assert!(!interp.session().is_connected());
    }

    struct Quoted;

    impl StatementBuilder for Quoted {
        fn drop_table(&self, table: &str) -> String {
            format!("DROP TABLE \"{}\"", table.replace('"', "\"\""))
        }
        fn select_all(&self, table: &str) -> String {
            Interpolated.select_all(table)
        }
        fn table_info(&self, table: &str) -> String {
            Interpolated.table_info(table)
        }
        fn list_tables(&self) -> String {
            Interpolated.list_tables()
        }
        fn create_text_table(&self, table: &str, columns: &[String]) -> String {
            Interpolated.create_text_table(table, columns)
        }
        fn insert_row(&self, table: &str, columns: &[String]) -> String {
            Interpolated.insert_row(table, columns)
        }
    }

    #[test]
    fn test_statement_builder_can_be_swapped() {
        let (_dir, interp, _log) = interpreter();
        let mut interp = interp.with_statements(Quoted);
        run(&mut interp, "CREATE DATABASE shop");
        run(&mut interp, "CREATE TABLE \"odd name\" (x INTEGER)");
        assert_eq!(
            run(&mut interp, "DROP TABLE odd name"),
            "Error dropping table: no such table: odd"
        );
    }
}
