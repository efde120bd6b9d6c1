//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks shared by both
//! servers, including error handling, configuration, logging setup, server
//! lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::{Config, ToolSet};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
