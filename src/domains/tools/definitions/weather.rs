//! Weather lookup tool definition.
//!
//! Performs one outbound HTTP call to the wttr.in JSON API and extracts the
//! current temperature and conditions. Network failures and unexpected
//! response shapes surface as distinct upstream errors.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::config::Config;

use super::super::error::ToolError;
use super::common::{error_result, structured_result};

#[cfg(feature = "http")]
use super::common::{parse_params, structured_response};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather fetcher tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchWeatherParams {
    /// City name to look up.
    pub city: String,
}

/// Structured output of the weather fetcher tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FetchWeatherOutput {
    /// Current temperature in degrees Celsius.
    pub temperature: i64,

    /// Human-readable current conditions.
    pub conditions: String,
}

// ============================================================================
// Upstream response shape
// ============================================================================

/// Expected shape of the wttr.in `format=j1` response.
///
/// Only the fields this tool extracts are modeled; anything else in the body
/// is ignored. A body that deserializes but lacks the first array elements is
/// a parse error, not a panic.
#[derive(Debug, Deserialize)]
struct WttrReport {
    current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,

    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrDescription>,
}

#[derive(Debug, Deserialize)]
struct WttrDescription {
    value: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather fetcher tool - one passthrough call to the weather upstream.
pub struct FetchWeatherTool;

impl FetchWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch-weather";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Weather Fetcher";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather information";

    /// Execute the tool logic.
    ///
    /// This is the only suspension point in the server: the request awaits
    /// the upstream call and nothing else. The city is interpolated into the
    /// URL path as-is; an unknown or empty city is the upstream's problem and
    /// comes back as a fetch error.
    pub async fn execute(
        params: &FetchWeatherParams,
        config: &Config,
    ) -> Result<FetchWeatherOutput, ToolError> {
        let url = format!(
            "{}/{}?format=j1",
            config.weather.base_url.trim_end_matches('/'),
            params.city
        );

        info!("Fetching weather for city: {}", params.city);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.weather.timeout_secs))
            .build()
            .map_err(|e| ToolError::upstream_fetch(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Weather upstream request failed: {}", e);
                ToolError::upstream_fetch(e.to_string())
            })?;

        let report: WttrReport = response.json().await.map_err(|e| {
            warn!("Weather upstream returned malformed body: {}", e);
            ToolError::upstream_parse(e.to_string())
        })?;

        let current = report
            .current_condition
            .first()
            .ok_or_else(|| ToolError::upstream_parse("current_condition is empty"))?;

        let temperature = current.temp_c.trim().parse::<i64>().map_err(|_| {
            ToolError::upstream_parse(format!("temp_C is not an integer: {:?}", current.temp_c))
        })?;

        let conditions = current
            .weather_desc
            .first()
            .ok_or_else(|| ToolError::upstream_parse("weatherDesc is empty"))?
            .value
            .clone();

        Ok(FetchWeatherOutput {
            temperature,
            conditions,
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: FetchWeatherParams = parse_params(arguments)?;
        let output = Self::execute(&params, &config).await?;
        structured_response(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.into()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FetchWeatherParams>(),
            output_schema: Some(cached_schema_for_type::<FetchWeatherOutput>()),
            annotations: None,
            icons: None,
            meta: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: FetchWeatherParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Upstream failures are tool results, not protocol errors.
                let result = match Self::execute(&params, &config).await {
                    Ok(output) => structured_result(&output),
                    Err(e) => error_result(&e.to_string()),
                };
                Ok::<CallToolResult, McpError>(result)
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
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: String) -> Config {
        let mut config = Config::default();
        config.weather.base_url = base_url;
        config.weather.timeout_secs = 5;
        config
    }

    fn clear_weather_body() -> serde_json::Value {
        serde_json::json!({
            "current_condition": [{
                "temp_C": "15",
                "weatherDesc": [{ "value": "Clear" }]
            }]
        })
    }

    #[tokio::test]
    async fn test_fetch_weather_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/London"))
            .and(query_param("format", "j1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_weather_body()))
            .mount(&server)
            .await;

        let config = config_for(server.uri());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let output = FetchWeatherTool::execute(&params, &config).await.unwrap();
        assert_eq!(output.temperature, 15);
        assert_eq!(output.conditions, "Clear");
    }

    #[tokio::test]
    async fn test_fetch_weather_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = config_for(server.uri());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let err = FetchWeatherTool::execute(&params, &config)
            .await
            .expect_err("expected upstream failure");
        assert!(matches!(err, ToolError::UpstreamFetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_weather_connection_refused() {
        // Nothing listens on port 1.
        let config = config_for("http://127.0.0.1:1".to_string());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let err = FetchWeatherTool::execute(&params, &config)
            .await
            .expect_err("expected connection failure");
        assert!(matches!(err, ToolError::UpstreamFetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_weather_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let config = config_for(server.uri());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let err = FetchWeatherTool::execute(&params, &config)
            .await
            .expect_err("expected parse failure");
        assert!(matches!(err, ToolError::UpstreamParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_weather_empty_current_condition() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "current_condition": [] })),
            )
            .mount(&server)
            .await;

        let config = config_for(server.uri());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let err = FetchWeatherTool::execute(&params, &config)
            .await
            .expect_err("expected parse failure");
        assert!(matches!(err, ToolError::UpstreamParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_weather_non_integer_temperature() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_condition": [{
                    "temp_C": "warm",
                    "weatherDesc": [{ "value": "Clear" }]
                }]
            })))
            .mount(&server)
            .await;

        let config = config_for(server.uri());
        let params = FetchWeatherParams {
            city: "London".to_string(),
        };

        let err = FetchWeatherTool::execute(&params, &config)
            .await
            .expect_err("expected parse failure");
        assert!(matches!(err, ToolError::UpstreamParse(_)));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_fetch_weather_http_handler() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_weather_body()))
            .mount(&server)
            .await;

        let config = Arc::new(config_for(server.uri()));
        let response =
            FetchWeatherTool::http_handler(serde_json::json!({ "city": "Paris" }), config)
                .await
                .unwrap();

        assert_eq!(response["structuredContent"]["temperature"], 15);
        assert_eq!(response["structuredContent"]["conditions"], "Clear");
        assert_eq!(response["isError"], false);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_fetch_weather_http_handler_missing_city() {
        let config = Arc::new(Config::default());
        let err = FetchWeatherTool::http_handler(serde_json::json!({}), config)
            .await
            .expect_err("expected invalid input");
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }
}
