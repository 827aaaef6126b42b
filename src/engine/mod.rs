//! Execution engine: dispatch, handlers and the `process` entrypoint

pub mod executor;
pub mod handlers;
pub mod interpreter;

pub use executor::{execute_command, ExecutionContext, ExecutionResult, ResultData};
pub use interpreter::Interpreter;
