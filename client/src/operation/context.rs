//! Execution context handed to every operation body.

use std::fmt;
use std::sync::Arc;

use super::spec::{OperationSpec, RequestId};
use crate::core::error::OperationError;
use crate::core::http::{HttpRequest, HttpResponse};
use crate::core::service::{AuthContext, HttpExecutor};

/// Read-only view of the session plus the executor, for one invocation.
#[derive(Clone)]
pub struct OperationContext {
    op: OperationSpec,
    request_id: RequestId,
    auth: Arc<dyn AuthContext>,
    executor: Arc<dyn HttpExecutor>,
    base_url: Arc<str>,
}

impl OperationContext {
    pub(crate) fn new(
        op: OperationSpec,
        request_id: RequestId,
        auth: Arc<dyn AuthContext>,
        executor: Arc<dyn HttpExecutor>,
        base_url: Arc<str>,
    ) -> Self {
        Self {
            op,
            request_id,
            auth,
            executor,
            base_url,
        }
    }

    pub fn operation(&self) -> OperationSpec {
        self.op
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Current session token, read at call time.
    pub fn bearer_token(&self) -> Option<String> {
        self.auth.bearer_token()
    }

    /// Reject the operation with a custom reason.
    pub fn reject_with_value(&self, reason: impl Into<String>) -> OperationError {
        OperationError::logical(reason)
    }

    /// Absolute URL for a catalog path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a request. Transport failures become `NetworkError`; every HTTP response is `Ok`.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, OperationError> {
        self.executor.execute(request).await.map_err(|e| {
            tracing::warn!(operation = %self.op, request_id = %self.request_id, error = %e, "Transport failure");
            OperationError::from(e)
        })
    }
}

impl fmt::Debug for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("op", &self.op)
            .field("request_id", &self.request_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
