//! Pest tokenizer and keyword classification

use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, SqlterpError};
use crate::parser::ast::*;

#[derive(Parser)]
#[grammar = "../grammar/command.pest"]
pub struct CommandParser;

/// Split input into whitespace-delimited tokens, borrowing from `input`
pub fn tokenize(input: &str) -> Result<Vec<&str>> {
    let pairs = CommandParser::parse(Rule::input, input)
        .map_err(|e| SqlterpError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| SqlterpError::ParseError("Empty input".to_string()))?;

    Ok(pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::token)
        .map(|p| p.as_str())
        .collect())
}

/// Classify one line of input.
///
/// Total: every string yields either a command or a diagnostic.
pub fn classify(input: &str) -> Classified {
    let query = input.trim();
    let tokens = match tokenize(query) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::warn!("tokenizer rejected input: {}", e);
            return Classified::Diagnostic(Diagnostic::Unknown);
        }
    };

    let Some(first) = tokens.first() else {
        return Classified::Diagnostic(Diagnostic::NoCommand);
    };

    let verb = first.to_uppercase();
    let sub_verb = tokens.get(1).map(|t| t.to_uppercase());
    let arg = |idx: usize| tokens.get(idx).map(|t| t.to_string());
    let sql = || query.to_string();

    let command = match verb.as_str() {
        "CREATE" => match sub_verb.as_deref() {
            Some("DATABASE") => arg(2).map(|name| Command::CreateDatabase { name }),
            Some("TABLE") => Some(Command::CreateTable { sql: sql() }),
            _ => None,
        },
        "DROP" => match sub_verb.as_deref() {
            Some("DATABASE") => arg(2).map(|name| Command::DropDatabase { name }),
            Some("TABLE") => arg(2).map(|name| Command::DropTable { name }),
            _ => None,
        },
        "SHOW" => match sub_verb.as_deref() {
            Some("TABLES") => Some(Command::ShowTables),
            _ => None,
        },
        "USE" => arg(1).map(|name| Command::Use { name }),
        "INSERT" => Some(Command::Insert { sql: sql() }),
        "SELECT" => Some(Command::Select { sql: sql() }),
        "UPDATE" => Some(Command::Update { sql: sql() }),
        "DELETE" => Some(Command::Delete { sql: sql() }),
        "LIST" => Some(Command::List),
        "DESCRIBE" => arg(1).map(|table| Command::Describe { table }),
        "EXPORT" => arg(1)
            .zip(arg(2))
            .map(|(table, file)| Command::Export { table, file }),
        "IMPORT" => arg(1)
            .zip(arg(2))
            .map(|(table, file)| Command::Import { table, file }),
        "BACKUP" => arg(1).map(|name| Command::Backup { name }),
        "RESTORE" => arg(1).map(|name| Command::Restore { name }),
        "EXIT" => Some(Command::Exit),
        _ => return Classified::Diagnostic(Diagnostic::Unknown),
    };

    match command {
        Some(cmd) => Classified::Command(cmd),
        None => Classified::Diagnostic(Diagnostic::Invalid(verb)),
    }
}
