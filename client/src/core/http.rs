//! Request/response shapes exchanged with an [`HttpExecutor`](super::service::HttpExecutor).

use serde_json::Value;

/// HTTP verbs used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outgoing request.
///
/// For `GET` the body (when it is a JSON object) is sent as query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer_token: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    pub fn json(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}

/// Normalized response. 4xx/5xx arrive here with `ok=false`, never as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub ok: bool,
    pub status: u16,
    /// Parsed body when it was valid JSON
    pub json: Option<Value>,
}

impl HttpResponse {
    pub fn new(status: u16, json: Option<Value>) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            json,
        }
    }
}
