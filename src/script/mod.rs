//! Script execution: one command per line, one session per script

pub mod runner;

pub use runner::{ScriptResult, ScriptRunner};
