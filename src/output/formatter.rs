//! Output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use crate::output::json::format_json;
use crate::output::table::format_result_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render a result as the text handed back to the caller
pub fn format_output(result: &ExecutionResult) -> String {
    match &result.data {
        ResultData::Message(message) => message.clone(),
        ResultData::Rows(rows) => format_result_set(rows),
    }
}

/// Render result text for printing in the requested format
pub fn render(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => text.to_string(),
        OutputFormat::Json => format_json(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CellValue, ResultSet};

    #[test]
    fn test_message_passes_through() {
        let result = ExecutionResult::message("Table created successfully");
        assert_eq!(format_output(&result), "Table created successfully");
    }

    #[test]
    fn test_rows_are_tabulated() {
        let rows = ResultSet::new(
            vec!["n".to_string()],
            vec![vec![CellValue::Integer(1)]],
        );
        let result = ExecutionResult::rows(rows);
        assert_eq!(format_output(&result), "n\n-\n1");
    }

    #[test]
    fn test_render_json() {
        assert_eq!(render("ok", OutputFormat::Human), "ok");
        assert_eq!(render("ok", OutputFormat::Json), "{\n  \"result\": \"ok\"\n}");
    }
}
