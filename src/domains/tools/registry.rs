//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Per-toolset tool name and metadata listings
//! - HTTP dispatch for tool calls (when the http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::{Config, ToolSet};

use super::definitions::{
    PtoDaysTakenTool, PtoDaysTool, PtoFullDayTool, PtoHalfDayTool, PtoHoursTool,
    WeatherByZipcodeTool,
};

#[cfg(feature = "http")]
use super::error::ToolError;

/// Tool registry - manages the tools of one server instance.
///
/// The registered set follows the `ToolSet` in the server configuration, so
/// the PTO server never exposes the weather tool and vice versa.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// The toolset this registry dispatches for.
    pub fn toolset(&self) -> ToolSet {
        self.config.server.toolset
    }

    /// Get the names of all tools in this registry's toolset.
    pub fn tool_names(&self) -> Vec<&'static str> {
        Self::names_for(self.toolset())
    }

    /// Tool names for a given toolset.
    pub fn names_for(toolset: ToolSet) -> Vec<&'static str> {
        match toolset {
            ToolSet::Pto => vec![
                PtoHoursTool::NAME,
                PtoDaysTool::NAME,
                PtoFullDayTool::NAME,
                PtoHalfDayTool::NAME,
                PtoDaysTakenTool::NAME,
            ],
            ToolSet::Weather => vec![WeatherByZipcodeTool::NAME],
        }
    }

    /// Tool metadata for a given toolset.
    ///
    /// This is the single source of truth for the advertised tools; both
    /// the HTTP transport and the rmcp router derive from the same
    /// definitions.
    pub fn tools_for(toolset: ToolSet) -> Vec<Tool> {
        match toolset {
            ToolSet::Pto => vec![
                PtoHoursTool::to_tool(),
                PtoDaysTool::to_tool(),
                PtoFullDayTool::to_tool(),
                PtoHalfDayTool::to_tool(),
                PtoDaysTakenTool::to_tool(),
            ],
            ToolSet::Weather => vec![WeatherByZipcodeTool::to_tool()],
        }
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match self.toolset() {
            ToolSet::Pto => match name {
                PtoHoursTool::NAME => PtoHoursTool::http_handler(arguments, self.config.clone()),
                PtoDaysTool::NAME => PtoDaysTool::http_handler(arguments, self.config.clone()),
                PtoFullDayTool::NAME => {
                    PtoFullDayTool::http_handler(arguments, self.config.clone())
                }
                PtoHalfDayTool::NAME => {
                    PtoHalfDayTool::http_handler(arguments, self.config.clone())
                }
                PtoDaysTakenTool::NAME => {
                    PtoDaysTakenTool::http_handler(arguments, self.config.clone())
                }
                _ => {
                    warn!("Unknown tool requested: {}", name);
                    Err(ToolError::not_found(name))
                }
            },
            ToolSet::Weather => match name {
                WeatherByZipcodeTool::NAME => {
                    WeatherByZipcodeTool::http_handler(arguments, self.config.clone()).await
                }
                _ => {
                    warn!("Unknown tool requested: {}", name);
                    Err(ToolError::not_found(name))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(toolset: ToolSet) -> Arc<Config> {
        Arc::new(Config::new(toolset))
    }

    #[test]
    fn test_pto_registry_tool_names() {
        let registry = ToolRegistry::new(test_config(ToolSet::Pto));
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_pto_hours"));
        assert!(names.contains(&"get_pto_days"));
        assert!(names.contains(&"can_take_full_day"));
        assert!(names.contains(&"can_take_half_day"));
        assert!(names.contains(&"how_many_days_taken"));
    }

    #[test]
    fn test_weather_registry_tool_names() {
        let registry = ToolRegistry::new(test_config(ToolSet::Weather));
        assert_eq!(registry.tool_names(), vec!["get_weather_by_zipcode"]);
    }

    #[test]
    fn test_tool_metadata_matches_names() {
        for toolset in [ToolSet::Pto, ToolSet::Weather] {
            let names = ToolRegistry::names_for(toolset);
            let tools = ToolRegistry::tools_for(toolset);
            assert_eq!(names.len(), tools.len());
            for tool in &tools {
                assert!(names.contains(&tool.name.as_ref()));
                assert!(tool.description.is_some());
            }
        }
    }

    #[test]
    fn test_toolsets_do_not_overlap() {
        let pto = ToolRegistry::names_for(ToolSet::Pto);
        for name in ToolRegistry::names_for(ToolSet::Weather) {
            assert!(!pto.contains(&name));
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_pto_hours() {
        let registry = ToolRegistry::new(test_config(ToolSet::Pto));
        let result = registry
            .call_tool("get_pto_hours", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config(ToolSet::Pto));
        let result = registry
            .call_tool("get_weather_by_zipcode", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
