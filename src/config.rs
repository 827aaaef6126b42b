//! Runtime configuration

use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "Dbs";
pub const DEFAULT_LOG_FILE: &str = "db_logs.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved settings shared by every entrypoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one backing file per database
    pub data_dir: PathBuf,
    /// Activity log destination
    pub log_file: PathBuf,
    pub log_level: String,
    /// Mirror the log to stderr
    pub log_to_console: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_console: false,
        }
    }
}

impl Config {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
