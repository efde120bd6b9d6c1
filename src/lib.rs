//! Workplace assistant MCP servers.
//!
//! This crate provides two independently deployable Model Context Protocol
//! (MCP) servers sharing one core:
//!
//! - **pto-server**: answers paid-time-off questions from an immutable,
//!   configuration-supplied balance
//! - **weather-server**: looks up current weather conditions by US zip code
//!   through WeatherAPI.com
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients, grouped by
//!     toolset (`pto` and `weather`)
//!
//! # Example
//!
//! ```rust,no_run
//! use office_mcp_servers::{core::Config, core::McpServer, core::ToolSet};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env(ToolSet::Pto);
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, ToolSet};
