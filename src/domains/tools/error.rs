//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch and execution.
///
/// `UnknownTool` and `InvalidInput` are protocol-level failures raised before
/// a handler runs. The upstream variants are raised only by `fetch-weather`
/// and map to the network and parse halves of that call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's input schema.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The outbound weather request failed (network, timeout, or non-success status).
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// The upstream body was not JSON or was missing the expected shape.
    #[error("Upstream response parse failed: {0}")]
    UpstreamParse(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new "upstream fetch" error.
    pub fn upstream_fetch(msg: impl Into<String>) -> Self {
        Self::UpstreamFetch(msg.into())
    }

    /// Create a new "upstream parse" error.
    pub fn upstream_parse(msg: impl Into<String>) -> Self {
        Self::UpstreamParse(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error should surface as a protocol-level invalid request
    /// rather than a tool execution failure.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::UnknownTool(_) | Self::InvalidInput(_))
    }
}
