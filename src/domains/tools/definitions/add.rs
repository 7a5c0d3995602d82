//! Arithmetic addition tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
#[cfg(feature = "http")]
use tracing::info;

use super::common::structured_result;

#[cfg(feature = "http")]
use super::super::error::ToolError;
#[cfg(feature = "http")]
use super::common::{parse_params, structured_response};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First addend.
    pub a: f64,

    /// Second addend.
    pub b: f64,
}

/// Structured output of the add tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AddOutput {
    /// Sum of the two inputs.
    pub result: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add tool - adds two numbers.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Add Numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers";

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> AddOutput {
        AddOutput {
            result: params.a + params.b,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: AddParams = parse_params(arguments)?;

        info!("Add tool (HTTP) called: {} + {}", params.a, params.b);

        structured_response(&Self::execute(&params))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.into()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddParams>(),
            output_schema: Some(cached_schema_for_type::<AddOutput>()),
            annotations: None,
            icons: None,
            meta: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok::<CallToolResult, McpError>(structured_result(&Self::execute(&params)))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_execute() {
        let output = AddTool::execute(&AddParams { a: 2.0, b: 3.0 });
        assert_eq!(output.result, 5.0);
    }

    #[test]
    fn test_add_negative() {
        let output = AddTool::execute(&AddParams { a: -1.0, b: 1.0 });
        assert_eq!(output.result, 0.0);
    }

    #[test]
    fn test_add_commutative() {
        let pairs = [(2.0, 3.0), (-7.5, 4.25), (0.0, 0.1), (1e9, -3.5)];
        for (a, b) in pairs {
            let forward = AddTool::execute(&AddParams { a, b });
            let reverse = AddTool::execute(&AddParams { a: b, b: a });
            assert_eq!(forward.result, reverse.result);
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_add_http_handler() {
        let response = AddTool::http_handler(serde_json::json!({ "a": 2, "b": 3 })).unwrap();
        assert_eq!(response["structuredContent"]["result"], 5.0);
        assert_eq!(response["isError"], false);

        let text = response["content"][0]["text"].as_str().unwrap();
        let rendered: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(rendered["result"], 5.0);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_add_http_handler_invalid_input() {
        let err = AddTool::http_handler(serde_json::json!({ "a": "not-a-number", "b": 1 }))
            .expect_err("expected invalid input");
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }
}
