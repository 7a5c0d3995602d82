//! Body Mass Index calculator tool definition.

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

/// Parameters for the BMI calculator tool.
///
/// Field names match the wire protocol (camelCase).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiParams {
    /// Body weight in kilograms.
    pub weight_kg: f64,

    /// Height in meters.
    pub height_m: f64,
}

/// Structured output of the BMI calculator tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CalculateBmiOutput {
    /// Body Mass Index (kg/m²).
    pub bmi: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// BMI calculator tool - computes weight / height².
///
/// A zero height yields a non-finite BMI. The value is propagated as-is,
/// never coerced to a finite number; the JSON text rendering of a non-finite
/// float is `null`.
pub struct CalculateBmiTool;

impl CalculateBmiTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate-bmi";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "BMI Calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Calculate Body Mass Index";

    /// Execute the tool logic.
    pub fn execute(params: &CalculateBmiParams) -> CalculateBmiOutput {
        CalculateBmiOutput {
            bmi: params.weight_kg / (params.height_m * params.height_m),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: CalculateBmiParams = parse_params(arguments)?;

        info!(
            "BMI tool (HTTP) called: weight {} kg, height {} m",
            params.weight_kg, params.height_m
        );

        structured_response(&Self::execute(&params))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.into()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CalculateBmiParams>(),
            output_schema: Some(cached_schema_for_type::<CalculateBmiOutput>()),
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
                let params: CalculateBmiParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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
