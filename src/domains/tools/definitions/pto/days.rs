//! PTO days tool definition.
//!
//! Converts the available hour count to 8-hour days. Fractional days are
//! reported verbatim, not rounded.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::tools::definitions::common::{NoParams, success_result};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::balance::{PtoBalance, format_days};

/// PTO days tool - reports available days alongside the raw hour count.
pub struct PtoDaysTool;

impl PtoDaysTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pto_days";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the total number of PTO days available (assuming an 8-hour workday).";

    /// Execute the tool logic.
    pub fn execute(balance: &PtoBalance) -> CallToolResult {
        info!("PTO days tool called");
        success_result(format!(
            "You have {} PTO days available ({} hours).",
            format_days(balance.days_available()),
            balance.hours_available()
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let balance = PtoBalance::from_config(&config.pto);
        let result = Self::execute(&balance);
        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let balance = PtoBalance::from_config(&config.pto);
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let _params: NoParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&balance))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn message(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("Expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_reports_fractional_days() {
        let balance = PtoBalance::new(94, 104);
        let result = PtoDaysTool::execute(&balance);
        assert_eq!(
            message(&result),
            "You have 11.75 PTO days available (94 hours)."
        );
    }

    #[test]
    fn test_whole_days_keep_trailing_zero() {
        let balance = PtoBalance::new(80, 0);
        let result = PtoDaysTool::execute(&balance);
        assert_eq!(
            message(&result),
            "You have 10.0 PTO days available (80 hours)."
        );
    }
}
