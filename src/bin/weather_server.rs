//! Weather Lookup MCP Server entry point.
//!
//! Exposes the current-conditions lookup tool backed by WeatherAPI.com.
//! Requires `WEATHER_API_KEY` in the environment (or a `.env` file); when
//! the key is absent the server still starts, and lookups report a
//! structured configuration failure.

use anyhow::Result;
use tracing::info;

use office_mcp_servers::core::{Config, McpServer, ToolSet, TransportService, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env(ToolSet::Weather);

    // Initialize logging
    logging::init(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server
    let server = McpServer::new(config.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
