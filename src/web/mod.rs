//! HTTP surface: `POST /execute` with body `{"query": "<command>"}`
//!
//! [`handle_request`] is the whole request contract and is always compiled;
//! the `server` module only binds it to an actix-web route.

use serde::Deserialize;
use serde_json::Value;

use crate::engine::Interpreter;
use crate::output::json::result_body;

#[cfg(feature = "web")]
pub mod server;

pub const NO_QUERY: &str = "No query provided";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    #[serde(default)]
    query: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebReply {
    pub status: u16,
    pub body: Value,
}

impl WebReply {
    fn ok(text: &str) -> Self {
        Self {
            status: 200,
            body: result_body(text),
        }
    }

    fn bad_request() -> Self {
        Self {
            status: 400,
            body: result_body(NO_QUERY),
        }
    }
}

/// Extract the query from a raw request body
fn query_of(body: &[u8]) -> Option<String> {
    let request: ExecuteRequest = serde_json::from_slice(body).ok()?;
    match request.query? {
        Value::String(query) if !query.is_empty() => Some(query),
        _ => None,
    }
}

/// Process one request body against `interpreter`
pub fn handle_request(interpreter: &mut Interpreter, body: &[u8]) -> WebReply {
    let Some(query) = query_of(body) else {
        tracing::info!("rejected request without a query");
        return WebReply::bad_request();
    };
    let (_, text) = interpreter.process(&query);
    WebReply::ok(&text)
}
