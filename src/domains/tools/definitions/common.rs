//! Common utilities shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Empty parameter set for tools that take no caller input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying a short summary plus a JSON payload.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_string_pretty(&data) {
        Ok(json) => CallToolResult::success(vec![Content::text(summary), Content::text(json)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}
