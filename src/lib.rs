//! Demo MCP Server Library
//!
//! This crate provides a minimal Model Context Protocol (MCP) demonstration
//! server exposing three tools: arithmetic addition, BMI calculation, and
//! weather lookup.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the three MCP tools and their dispatch surface
//!
//! # Example
//!
//! ```rust,no_run
//! use demo_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
