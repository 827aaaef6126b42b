//! JSON output formatting

use serde_json::{json, Value};

/// Response body carrying one result text
pub fn result_body(text: &str) -> Value {
    json!({ "result": text })
}

pub fn format_json(text: &str) -> String {
    serde_json::to_string_pretty(&result_body(text)).unwrap_or_else(|_| "{}".to_string())
}
