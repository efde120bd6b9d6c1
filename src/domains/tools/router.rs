//! Tool Router - builds the rmcp ToolRouter for a server instance.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; which routes are registered follows the configured toolset.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::{Config, ToolSet};

use super::definitions::{
    PtoDaysTakenTool, PtoDaysTool, PtoFullDayTool, PtoHalfDayTool, PtoHoursTool,
    WeatherByZipcodeTool,
};

/// Build the tool router for the configured toolset.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    match config.server.toolset {
        ToolSet::Pto => ToolRouter::new()
            .with_route(PtoHoursTool::create_route(config.clone()))
            .with_route(PtoDaysTool::create_route(config.clone()))
            .with_route(PtoFullDayTool::create_route(config.clone()))
            .with_route(PtoHalfDayTool::create_route(config.clone()))
            .with_route(PtoDaysTakenTool::create_route(config)),
        ToolSet::Weather => {
            ToolRouter::new().with_route(WeatherByZipcodeTool::create_route(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config(toolset: ToolSet) -> Arc<Config> {
        Arc::new(Config::new(toolset))
    }

    #[test]
    fn test_build_pto_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config(ToolSet::Pto));
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_pto_hours"));
        assert!(names.contains(&"get_pto_days"));
        assert!(names.contains(&"can_take_full_day"));
        assert!(names.contains(&"can_take_half_day"));
        assert!(names.contains(&"how_many_days_taken"));
    }

    #[test]
    fn test_build_weather_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config(ToolSet::Weather));
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "get_weather_by_zipcode");
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router agree for both toolsets
        for toolset in [ToolSet::Pto, ToolSet::Weather] {
            let config = test_config(toolset);
            let registry = ToolRegistry::new(config.clone());
            let registry_names = registry.tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(config);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name));
            }
        }
    }
}
