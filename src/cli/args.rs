//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_DATA_DIR, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use crate::web::DEFAULT_BIND;

#[derive(Parser, Debug)]
#[command(name = "sqlterp")]
#[command(author, version, about = "Run SQL commands against local SQLite databases", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Directory holding the database files
    #[arg(long, global = true, env = "SQLTERP_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Activity log file
    #[arg(long, global = true, env = "SQLTERP_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log filter (e.g. "info", "sqlterp=debug")
    #[arg(long, global = true, env = "SQLTERP_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Verbose output, also mirrors the log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Process a single command
    Query {
        /// The command to process
        query: String,

        /// Print the result as {"result": ...}
        #[arg(long)]
        json: bool,
    },

    /// Run a file of commands, one per line
    Run {
        /// Path to the script file
        file: PathBuf,
    },

    /// Start interactive mode
    Repl,

    /// Serve POST /execute over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
    },
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            data_dir: self.data_dir.clone(),
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
            log_to_console: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sqlterp", "query", "LIST"]).unwrap();
        let config = args.config();
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_console);
        match args.command {
            SubCommand::Query { query, json } => {
                assert_eq!(query, "LIST");
                assert!(!json);
            }
            other => panic!("Expected query, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "sqlterp", "run", "setup.sql", "--data-dir", "/tmp/dbs", "-v",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dbs"));
        assert!(config.log_to_console);
    }

    #[test]
    fn test_serve_bind() {
        let args = Args::try_parse_from(["sqlterp", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert!(matches!(args.command, SubCommand::Serve { ref bind } if bind == "0.0.0.0:8080"));
    }
}
