//! Days taken tool definition.
//!
//! Reports how many PTO days the employee has taken this year. The message
//! intentionally echoes the available hour count, not the taken one - this
//! matches the deployed behavior and the tests pin it.

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

/// Days taken tool - reports the days taken this year.
pub struct PtoDaysTakenTool;

impl PtoDaysTakenTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "how_many_days_taken";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Report how many PTO days the employee has taken this year.";

    /// Execute the tool logic.
    pub fn execute(balance: &PtoBalance) -> CallToolResult {
        info!("Days taken tool called");
        success_result(format!(
            "You have taken {} PTO days off this year. You have ({} hours).",
            format_days(balance.days_taken()),
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
    fn test_reports_days_taken_but_echoes_available_hours() {
        let result = PtoDaysTakenTool::execute(&PtoBalance::new(94, 104));
        assert_eq!(
            message(&result),
            "You have taken 13.0 PTO days off this year. You have (94 hours)."
        );
    }

    #[test]
    fn test_fractional_days_taken() {
        let result = PtoDaysTakenTool::execute(&PtoBalance::new(94, 6));
        assert_eq!(
            message(&result),
            "You have taken 0.75 PTO days off this year. You have (94 hours)."
        );
    }
}
