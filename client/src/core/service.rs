//! # Service Traits
//!
//! Seams for dependency injection: the HTTP executor the operations run against,
//! and the read-only capability operations use to obtain the bearer token.

use async_trait::async_trait;

use super::error::TransportError;
use super::http::{HttpRequest, HttpResponse};

/// Performs a single network call and normalizes the result.
///
/// Implementations must return `Ok` for every response received, whatever its
/// status, and `Err` only when no response was obtained.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Read access to the current session token.
///
/// Operations never reach into the auth slice directly; they are handed this
/// capability through their context.
pub trait AuthContext: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Fixed token, for tools and tests that run operations outside a store.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl AuthContext for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
