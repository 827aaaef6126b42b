//! CSV codec for EXPORT / IMPORT
//!
//! Comma delimited, double-quote quoted. Fields containing the delimiter, a
//! quote or a line break are quoted with inner quotes doubled.

use std::io::{self, Write};

use crate::storage::ResultSet;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Header plus records as read from a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// Write a header line of column names followed by one line per row
pub fn write_csv<W: Write>(writer: &mut W, result: &ResultSet) -> io::Result<()> {
    write_record(writer, result.columns.iter().map(|c| c.as_str()))?;
    for row in &result.rows {
        let fields: Vec<String> = row.iter().map(|cell| cell.to_csv_field()).collect();
        write_record(writer, fields.iter().map(|f| f.as_str()))?;
    }
    writer.flush()
}

fn write_record<'a, W: Write>(
    writer: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let line: Vec<String> = fields.map(escape_field).collect();
    writeln!(writer, "{}", line.join(&DELIMITER.to_string()))
}

fn escape_field(value: &str) -> String {
    let needs_quoting = value.contains(DELIMITER)
        || value.contains(QUOTE)
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        let escaped = value.replace(QUOTE, "\"\"");
        format!("{}{}{}", QUOTE, escaped, QUOTE)
    } else {
        value.to_string()
    }
}

/// Parse CSV text. Returns `None` when there is no header line.
///
/// Fails on a quoted field that is never closed.
pub fn read_csv(input: &str) -> Result<Option<CsvTable>, String> {
    let mut records = parse_records(input)?.into_iter();
    let Some(header) = records.next() else {
        return Ok(None);
    };
    Ok(Some(CsvTable {
        header,
        records: records.collect(),
    }))
}

fn parse_records(input: &str) -> Result<Vec<Vec<String>>, String> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // A record is pending once any character of it has been seen
    let mut pending = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            QUOTE => {
                in_quotes = true;
                pending = true;
            }
            DELIMITER => {
                record.push(std::mem::take(&mut field));
                pending = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if pending {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                    pending = false;
                }
            }
            other => {
                field.push(other);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    if pending {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
