//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP servers.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool),
//!   grouped into the `pto` and `weather` toolsets
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! Which toolset a server registers is decided by the `ToolSet` in its
//! configuration; the router and registry both branch on it.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
