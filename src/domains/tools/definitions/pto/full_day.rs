//! Full day eligibility tool definition.

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

use super::balance::PtoBalance;

/// Full day tool - checks whether the balance covers a full day off (8 hours).
pub struct PtoFullDayTool;

impl PtoFullDayTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "can_take_full_day";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check if the employee has enough PTO for a full day off (8 hours).";

    /// Execute the tool logic. Exactly one branch fires for any balance.
    pub fn execute(balance: &PtoBalance) -> CallToolResult {
        info!("Full day tool called");
        let message = if balance.can_take_full_day() {
            format!(
                "Yes, you can take a full day off. You have {} hours available.",
                balance.hours_available()
            )
        } else {
            format!(
                "No, you don't have enough PTO for a full day. You only have {} hours available.",
                balance.hours_available()
            )
        };
        success_result(message)
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
