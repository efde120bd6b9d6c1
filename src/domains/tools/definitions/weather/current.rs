//! Current weather lookup tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::domains::tools::definitions::common::structured_result;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::client::{WeatherClient, WeatherError, WeatherFailure};

/// Parameters for the weather lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherByZipcodeParams {
    /// US zip code to look up.
    #[schemars(description = "US zip code (e.g., \"10001\")")]
    pub zipcode: String,
}

/// Weather lookup tool - current conditions by US zip code.
pub struct WeatherByZipcodeTool;

impl WeatherByZipcodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_by_zipcode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather for a US zip code from WeatherAPI.com. \
         Returns the location, temperature (F and C), condition, humidity, wind speed, \
         feels-like temperature, and the provider's last-updated timestamp. Failures are \
         reported as structured data with an error kind and message.";

    /// Execute the tool logic.
    ///
    /// Both outcomes are well-formed results: a success carries the report
    /// as JSON, a failure carries the serialized error kind and message.
    pub async fn execute(params: &WeatherByZipcodeParams, client: &WeatherClient) -> CallToolResult {
        info!("Weather lookup tool called for zip code: {}", params.zipcode);

        match client.current_by_zipcode(&params.zipcode).await {
            Ok(report) => {
                let summary = format!(
                    "Current weather for {} (zip {}): {}, {}°F",
                    report.location, report.zipcode, report.condition, report.temperature_f
                );
                structured_result(summary, report)
            }
            Err(error) => {
                warn!("Weather lookup failed: {}", error);
                Self::failure_result(&error)
            }
        }
    }

    /// Build the structured failure result for a lookup error.
    fn failure_result(error: &WeatherError) -> CallToolResult {
        let failure = WeatherFailure::from(error);
        let payload = serde_json::to_string_pretty(&failure)
            .unwrap_or_else(|_| failure.message.clone());
        CallToolResult::error(vec![Content::text(payload)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: WeatherByZipcodeParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let client = WeatherClient::new(&config.weather, &config.credentials);
        let result = Self::execute(&params, &client).await;

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
            input_schema: cached_schema_for_type::<WeatherByZipcodeParams>(),
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
        let client = Arc::new(WeatherClient::new(&config.weather, &config.credentials));
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: WeatherByZipcodeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
