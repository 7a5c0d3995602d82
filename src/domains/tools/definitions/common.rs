//! Common helpers shared across tool definitions.
//!
//! Every tool returns its output twice: once as a text content block holding
//! the JSON encoding of the output, and once as `structuredContent`. The
//! helpers here build both forms from a serializable output value.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use super::super::error::ToolError;

/// Build a successful `CallToolResult` from a tool output.
///
/// The text content is the JSON encoding of the output; the same value is
/// attached as structured content. Non-finite floats serialize as JSON null
/// in the rendering but are preserved in the in-memory output.
pub fn structured_result<T: Serialize>(output: &T) -> CallToolResult {
    match serde_json::to_value(output) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(structured.to_string())],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            error_result(&format!("Failed to serialize tool output: {}", e))
        }
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Serialize a tool output into the HTTP transport response body.
///
/// Mirrors `structured_result` but produces the raw JSON object the JSON-RPC
/// layer returns for `tools/call`.
#[cfg(feature = "http")]
pub fn structured_response<T: Serialize>(output: &T) -> Result<serde_json::Value, ToolError> {
    let structured = serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))?;

    Ok(serde_json::json!({
        "content": [{ "type": "text", "text": structured.to_string() }],
        "structuredContent": structured,
        "isError": false
    }))
}

/// Deserialize tool arguments into a typed parameter struct.
///
/// This is the input validation layer: a shape mismatch surfaces as
/// [`ToolError::InvalidInput`].
pub fn parse_params<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize)]
    struct Sample {
        value: f64,
    }

    #[derive(Debug, Deserialize)]
    struct SampleParams {
        a: f64,
    }

    #[test]
    fn test_structured_result_has_both_forms() {
        let result = structured_result(&Sample { value: 1.5 });
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.expect("structured content");
        assert_eq!(structured["value"], 1.5);

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        let rendered: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(rendered, structured);
    }

    #[test]
    fn test_error_result_flagged() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_parse_params_invalid_type() {
        let err = parse_params::<SampleParams>(serde_json::json!({ "a": "not-a-number" }))
            .expect_err("string should not parse as number");
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_params_valid() {
        let params: SampleParams = parse_params(serde_json::json!({ "a": 2.0 })).unwrap();
        assert_eq!(params.a, 2.0);
    }
}
