//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing
//!
//! The registry is built once at startup from the configuration and is
//! read-only afterwards; requests share it without locking.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::{AddTool, CalculateBmiTool, FetchWeatherTool};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![AddTool::NAME, CalculateBmiTool::NAME, FetchWeatherTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddTool::to_tool(),
            CalculateBmiTool::to_tool(),
            FetchWeatherTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools. `fetch-weather` is
    /// the only handler that awaits; the rest run to completion immediately.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            CalculateBmiTool::NAME => CalculateBmiTool::http_handler(arguments),
            FetchWeatherTool::NAME => {
                FetchWeatherTool::http_handler(arguments, self.config.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"add"));
        assert!(names.contains(&"calculate-bmi"));
        assert!(names.contains(&"fetch-weather"));
    }

    #[test]
    fn test_registry_tool_metadata() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 3);
        for tool in &tools {
            assert!(tool.description.is_some());
            assert!(tool.output_schema.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_add() {
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("add", serde_json::json!({ "a": 2, "b": 3 }))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["result"], 5.0);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let err = registry
            .call_tool("nonexistent-tool", serde_json::json!({}))
            .await
            .expect_err("expected unknown tool");
        assert!(matches!(err, ToolError::UnknownTool(_)));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_input() {
        let registry = ToolRegistry::new(test_config());
        let err = registry
            .call_tool("add", serde_json::json!({ "a": "not-a-number" }))
            .await
            .expect_err("expected invalid input");
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }
}
