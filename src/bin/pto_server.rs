//! PTO Hours MCP Server entry point.
//!
//! Exposes the PTO balance query tools. The balance is fixed at startup
//! from configuration (defaults: 94 hours available, 104 taken) and never
//! changes for the lifetime of the process.

use anyhow::Result;
use tracing::info;

use office_mcp_servers::core::{Config, McpServer, ToolSet, TransportService, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env(ToolSet::Pto);

    // Initialize logging
    logging::init(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "PTO balance: {} hours available, {} hours taken",
        config.pto.hours_available, config.pto.hours_taken
    );

    // Create the MCP server
    let server = McpServer::new(config.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
