//! Backing-file directory and scoped engine connections
//!
//! One file per database, `<name>.db`, with at most one backup beside it,
//! `<name>_backup.db`. The store never holds a connection itself: callers get
//! a [`ScopedConnection`] that closes when dropped.

use std::fs::{self, OpenOptions};
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use rusqlite::{Batch, Connection, OpenFlags, Statement};

/// Extension of every backing file
pub const DATABASE_EXTENSION: &str = "db";

/// Suffix appended to the database name for its backup file
pub const BACKUP_SUFFIX: &str = "_backup";

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the directory at `root`, creating it if missing
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, DATABASE_EXTENSION))
    }

    pub fn backup_path(&self, name: &str) -> PathBuf {
        self.root.join(backup_file_name(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.database_path(name).is_file()
    }

    /// Create the backing file for `name` if it does not exist yet.
    ///
    /// An empty file is a valid empty SQLite database.
    pub fn create(&self, name: &str) -> io::Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.database_path(name))?;
        Ok(())
    }

    /// Open a connection to `name`, creating the database if it is missing
    pub fn connect(&self, name: &str) -> rusqlite::Result<ScopedConnection> {
        let conn = Connection::open_with_flags(
            self.database_path(name),
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        tracing::debug!(database = name, "acquired connection");
        Ok(ScopedConnection {
            database: name.to_string(),
            conn,
        })
    }

    pub fn remove(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.database_path(name))
    }

    /// Names of all databases in the directory, sorted, backups excluded
    pub fn list(&self) -> io::Result<Vec<String>> {
        let backup_tail = format!("{}.{}", BACKUP_SUFFIX, DATABASE_EXTENSION);
        let db_tail = format!(".{}", DATABASE_EXTENSION);

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(&backup_tail) {
                continue;
            }
            if let Some(name) = file_name.strip_suffix(&db_tail) {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Copy the live file over the backup, replacing any earlier backup
    pub fn backup(&self, name: &str) -> io::Result<u64> {
        fs::copy(self.database_path(name), self.backup_path(name))
    }

    /// Copy the backup back over the live file
    pub fn restore(&self, name: &str) -> io::Result<u64> {
        fs::copy(self.backup_path(name), self.database_path(name))
    }

    pub fn has_backup(&self, name: &str) -> bool {
        self.backup_path(name).is_file()
    }
}

pub fn backup_file_name(name: &str) -> String {
    format!("{}{}.{}", name, BACKUP_SUFFIX, DATABASE_EXTENSION)
}

/// An engine connection that lives for one handler invocation
#[derive(Debug)]
pub struct ScopedConnection {
    database: String,
    conn: Connection,
}

impl ScopedConnection {
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Run one statement inside a transaction and commit it.
    ///
    /// Rows the statement returns (`... RETURNING`) are stepped through and
    /// discarded.
    pub fn execute_and_commit(&mut self, sql: &str) -> rusqlite::Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = prepare_single(&tx, sql)?;
            let mut rows = stmt.query([])?;
            while rows.next()?.is_some() {}
        }
        tx.commit()
    }
}

/// Prepare `sql`, which must hold exactly one statement.
///
/// Trailing whitespace, `;` and comments are fine; a second statement fails
/// with [`rusqlite::Error::MultipleStatement`] instead of being ignored.
pub fn prepare_single<'c>(conn: &'c Connection, sql: &str) -> rusqlite::Result<Statement<'c>> {
    let mut batch = Batch::new(conn, sql);
    let Some(stmt) = batch.next()? else {
        return conn.prepare(sql);
    };
    if batch.next()?.is_some() {
        return Err(rusqlite::Error::MultipleStatement);
    }
    Ok(stmt)
}

impl Deref for ScopedConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        tracing::debug!(database = %self.database, "released connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("Dbs");
        let store = Store::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_paths() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        assert_eq!(store.database_path("shop"), temp_dir.path().join("shop.db"));
        assert_eq!(store.backup_path("shop"), temp_dir.path().join("shop_backup.db"));
    }

    #[test]
    fn test_create_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        store.create("zoo").unwrap();
        store.create("alpha").unwrap();
        store.create("alpha").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "zoo"]);
        assert!(store.exists("alpha"));
        assert!(!store.exists("beta"));
    }

    #[test]
    fn test_list_excludes_backups() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        store.create("shop").unwrap();
        store.backup("shop").unwrap();

        assert!(store.has_backup("shop"));
        assert_eq!(store.list().unwrap(), vec!["shop"]);
    }

    #[test]
    fn test_backup_suffixed_name_is_hidden_from_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        store.create("x_backup").unwrap();
        assert!(store.exists("x_backup"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_connect_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        {
            let mut conn = store.connect("fresh").unwrap();
            assert_eq!(conn.database(), "fresh");
            conn.execute_and_commit("CREATE TABLE t (a INTEGER)").unwrap();
        }
        assert!(store.exists("fresh"));
    }

    #[test]
    fn test_execute_and_commit_rejects_second_statement() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut conn = store.connect("shop").unwrap();
        conn.execute_and_commit("CREATE TABLE t (a INTEGER)").unwrap();

        let err = conn
            .execute_and_commit("INSERT INTO t VALUES (1); INSERT INTO t VALUES (2)")
            .unwrap_err();
        assert!(matches!(err, rusqlite::Error::MultipleStatement));

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM t", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_execute_and_commit_accepts_returning() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut conn = store.connect("shop").unwrap();
        conn.execute_and_commit("CREATE TABLE t (a INTEGER);  -- items\n").unwrap();
        conn.execute_and_commit("INSERT INTO t VALUES (7) RETURNING a").unwrap();

        let a: i64 = conn.query_row("SELECT a FROM t", [], |r| r.get(0)).unwrap();
        assert_eq!(a, 7);
    }

    #[test]
    fn test_remove_missing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        assert!(store.remove("ghost").is_err());
    }

    #[test]
    fn test_restore_without_backup_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        store.create("shop").unwrap();
        assert!(store.restore("shop").is_err());
    }
}
