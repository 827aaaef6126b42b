//! Script runner for command files

use std::fs;
use std::path::Path;

use crate::engine::Interpreter;
use crate::error::Result;

/// Lines starting with this prefix are comments
pub const COMMENT_PREFIX: &str = "--";

/// Result of script execution
#[derive(Debug, Default)]
pub struct ScriptResult {
    /// Result text of every processed command, in order
    pub results: Vec<String>,
    /// Whether the script ended on an `EXIT` line
    pub exited: bool,
}

impl ScriptResult {
    pub fn commands_processed(&self) -> usize {
        self.results.len()
    }
}

/// Runs every command of a script through one interpreter
pub struct ScriptRunner {
    interpreter: Interpreter,
    /// Print each result as it is produced
    echo: bool,
}

impl ScriptRunner {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            echo: false,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Load and run a script file
    pub fn run_file(&mut self, path: &Path) -> Result<ScriptResult> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(script = %path.display(), "running script");
        Ok(self.run_source(&content))
    }

    /// Run script text, skipping blank and comment lines and stopping at `EXIT`
    pub fn run_source(&mut self, source: &str) -> ScriptResult {
        let mut result = ScriptResult::default();

        for line in source.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let (_, text) = self.interpreter.process(line);
            if self.echo {
                println!("{}", text);
            }
            result.results.push(text);

            if line.eq_ignore_ascii_case("EXIT") {
                result.exited = true;
                break;
            }
        }

        result
    }

    /// Close whatever connection the script left open
    pub fn finish(mut self) -> Interpreter {
        self.interpreter.shutdown();
        self.interpreter
    }
}
