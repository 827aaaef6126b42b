//! rustyline front end for the interactive loop

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::Interpreter;
use crate::error::{Result, SqlterpError};
use crate::repl::{hang_up, prompt, step, Step, BANNER};

pub fn run(interpreter: &mut Interpreter) -> Result<()> {
    let mut rl =
        DefaultEditor::new().map_err(|e| SqlterpError::ExecutionError(e.to_string()))?;

    println!("{}", BANNER);

    loop {
        match rl.readline(&prompt(interpreter.session())) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }
                match step(interpreter, &line) {
                    Step::Continue(Some(text)) => println!("{}", text),
                    Step::Continue(None) => {}
                    Step::Quit(text) => {
                        println!("{}", text);
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", hang_up(interpreter));
                break;
            }
            Err(err) => {
                interpreter.shutdown();
                return Err(SqlterpError::ExecutionError(err.to_string()));
            }
        }
    }

    Ok(())
}
