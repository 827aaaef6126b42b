//! Interactive loop
//!
//! With the `repl` feature the loop reads through rustyline (line editing and
//! history); otherwise [`run_plain`] reads buffered stdin with the same rules.

#[cfg(feature = "repl")]
pub mod interactive;

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::engine::Interpreter;
use crate::error::Result;
use crate::session::Session;

pub const BANNER: &str = "[SQL Interpreter] --- Type 'EXIT' to quit.";

pub const GOODBYE: &str = "Exiting...";

/// What the loop does after one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text and read the next line
    Continue(Option<String>),
    /// Print the text and stop
    Quit(String),
}

pub fn prompt(session: &Session) -> String {
    match session.selected_database() {
        Some(name) => format!("sql [{}]> ", name),
        None => "sql> ".to_string(),
    }
}

/// Handle one line read at the prompt
pub fn step(interpreter: &mut Interpreter, line: &str) -> Step {
    let line = line.trim();
    if line.is_empty() {
        return Step::Continue(None);
    }
    if line.eq_ignore_ascii_case("help") {
        return Step::Continue(Some(help_text().to_string()));
    }

    let (_, text) = interpreter.process(line);
    if line.eq_ignore_ascii_case("EXIT") {
        Step::Quit(text)
    } else {
        Step::Continue(Some(text))
    }
}

/// End of input or interrupt: close the session and say goodbye
pub fn hang_up(interpreter: &mut Interpreter) -> &'static str {
    interpreter.shutdown();
    GOODBYE
}

/// Run the loop over the configured store
pub fn run_repl(config: &Config) -> Result<()> {
    let mut interpreter = Interpreter::from_config(config)?;

    #[cfg(feature = "repl")]
    {
        interactive::run(&mut interpreter)
    }

    #[cfg(not(feature = "repl"))]
    {
        let stdin = std::io::stdin();
        run_plain(&mut interpreter, stdin.lock(), std::io::stdout())
    }
}

/// Line loop over any reader, for builds without line editing
pub fn run_plain<R: BufRead, W: Write>(
    interpreter: &mut Interpreter,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}", BANNER)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt(interpreter.session()))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\n{}", hang_up(interpreter))?;
            return Ok(());
        }

        match step(interpreter, &line) {
            Step::Continue(Some(text)) => writeln!(output, "{}", text)?,
            Step::Continue(None) => {}
            Step::Quit(text) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }
}

pub fn help_text() -> &'static str {
    r#"
Commands
========

DATABASES:
  CREATE DATABASE <name>          - Create a database and select it
  USE <name>                      - Select a database
  DROP DATABASE <name>            - Delete a database file
  LIST                            - List databases
  BACKUP <name>                   - Copy <name> to <name>_backup
  RESTORE <name>                  - Copy the backup back over <name>

TABLES (need a selected database):
  CREATE TABLE ...                - Run the statement as written
  INSERT / SELECT / UPDATE / DELETE ...
  DROP TABLE <table>
  SHOW TABLES
  DESCRIBE <table>                - Column names and types
  EXPORT <table> <file.csv>
  IMPORT <table> <file.csv>       - Create text columns from the header

SESSION:
  EXIT                            - Close the connection and quit
  help                            - Show this help
"#
}
