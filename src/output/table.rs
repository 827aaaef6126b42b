//! Aligned text tables

use crate::storage::{CellValue, ResultSet};

/// Text returned for a query that produced no rows
pub const NO_RECORDS: &str = "No records found";

pub fn format_result_set(result: &ResultSet) -> String {
    format_table(&result.columns, &result.rows)
}

/// Render columns and rows as a `" | "`-separated table.
///
/// Every column is as wide as its widest header or cell; values are
/// left-aligned and padded on the right.
pub fn format_table(columns: &[String], rows: &[Vec<CellValue>]) -> String {
    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let header = pad_line(columns.iter().map(String::as_str), &widths);
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(header);
    lines.push(separator);
    for row in &cells {
        lines.push(pad_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn pad_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
}
