//! Request URL assembly and the HTTP round trip

use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Append `key` and the given parameters to `base` as a URL-encoded query
pub fn build_url(base: &str, api_key: &str, params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| TranslationError::ConfigError {
        message: format!("Invalid endpoint {}: {}", base, e),
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("key", api_key);
        for (name, value) in params {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// Thin wrapper over a pooled reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with reqwest defaults
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode the JSON body
    pub async fn get_json(&self, url: Url) -> Result<Value> {
        debug!(
            "GET {}://{}{}",
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path()
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("Response status {}, {} bytes", status, body.len());

        decode_response(status, &body)
    }
}

/// PHP-style emptiness: null, false, 0, "", [] and {} carry nothing
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Messages under `error.errors[*].message`, joined with spaces
fn server_error_messages(body: &Value) -> String {
    body["error"]["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["message"].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Turn a status and raw body into decoded JSON or a descriptive error
pub fn decode_response(status: StatusCode, body: &str) -> Result<Value> {
    let decoded = serde_json::from_str::<Value>(body)
        .ok()
        .filter(|v| !is_empty_value(v));

    let Some(decoded) = decoded else {
        warn!("Empty or invalid response body (status {})", status);
        return Err(TranslationError::EmptyResponse {
            status: status.as_u16(),
        });
    };

    if status != StatusCode::OK {
        let message = server_error_messages(&decoded);
        warn!("API error {}: {}", status.as_u16(), message);
        return Err(TranslationError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(decoded)
}
