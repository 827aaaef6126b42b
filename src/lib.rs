//! sqlterp - a line-oriented SQL command interpreter
//!
//! Each line is classified into a command, run against a directory of SQLite
//! databases on behalf of one session, and answered with a single result
//! text. Every processed command lands in the activity log.
//!
//! # Example
//!
//! ```no_run
//! use sqlterp::{Interpreter, Store};
//!
//! let store = Store::open("Dbs").unwrap();
//! let mut interpreter = Interpreter::new(store);
//! interpreter.process("CREATE DATABASE shop");
//! interpreter.process("CREATE TABLE items (id INTEGER, name TEXT)");
//! let (_, text) = interpreter.process("SELECT * FROM items");
//! println!("{}", text);
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod output;
pub mod parser;
pub mod repl;
pub mod script;
pub mod session;
pub mod storage;
pub mod web;

pub use activity::{init_logging, ActivityLog, ActivityRecord, MemoryActivityLog, Severity};
pub use config::Config;
pub use engine::{execute_command, ExecutionContext, ExecutionResult, Interpreter};
pub use error::{Result, SqlterpError};
pub use output::{format_output, OutputFormat};
pub use parser::{classify, Classified, Command, Diagnostic};
pub use script::{ScriptResult, ScriptRunner};
pub use session::{Session, SessionState};
pub use storage::Store;
