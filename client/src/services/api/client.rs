//! # API Client
//!
//! reqwest-backed [`HttpExecutor`]. Every HTTP response, whatever its status, comes
//! back as an [`HttpResponse`]; only transport failures are errors.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result, TransportError};
use crate::core::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::core::service::HttpExecutor;

/// HTTP client for the banking backend.
///
/// Holds a pooled `reqwest::Client`; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(config.request_timeout)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    fn build(&self, request: &HttpRequest) -> reqwest::RequestBuilder {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        let mut builder = builder
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        match (&request.body, request.method) {
            (Some(Value::Object(map)), HttpMethod::Get) => {
                let query: Vec<(&str, String)> = map
                    .iter()
                    .filter_map(|(key, value)| query_value(value).map(|v| (key.as_str(), v)))
                    .collect();
                builder.query(&query)
            }
            (Some(_), HttpMethod::Get) | (None, _) => builder,
            (Some(body), _) => builder.json(body),
        }
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait::async_trait]
impl HttpExecutor for ApiClient {
    #[tracing::instrument(skip_all, fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let start = std::time::Instant::now();

        let response = self.build(&request).send().await.map_err(|e| {
            tracing::error!(error = %e, "Network error");
            TransportError::from(e)
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(status, error = %e, "Failed to read response body");
            TransportError::from(e)
        })?;
        let json = serde_json::from_slice::<Value>(&bytes).ok();

        tracing::debug!(
            status,
            json = json.is_some(),
            duration_ms = start.elapsed().as_millis(),
            "Response received"
        );
        Ok(HttpResponse::new(status, json))
    }
}
