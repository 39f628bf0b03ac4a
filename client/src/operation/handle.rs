//! Awaitable handle to an in-flight operation.

use std::future::IntoFuture;
use std::marker::PhantomData;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinHandle;

use super::spec::{OperationSpec, RequestId};
use crate::core::error::OperationError;

/// Promise-like handle returned by every dispatch.
///
/// Awaiting yields the operation's payload decoded as `T`. Dropping the handle does
/// not cancel the request; the store is updated either way.
#[must_use = "the operation runs regardless; await the handle to observe its result"]
pub struct OperationHandle<T> {
    op: OperationSpec,
    request_id: RequestId,
    sequence: u64,
    join: JoinHandle<Result<Value, OperationError>>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> OperationHandle<T> {
    pub(crate) fn new(
        op: OperationSpec,
        request_id: RequestId,
        sequence: u64,
        join: JoinHandle<Result<Value, OperationError>>,
    ) -> Self {
        Self {
            op,
            request_id,
            sequence,
            join,
            _payload: PhantomData,
        }
    }

    pub fn op(&self) -> OperationSpec {
        self.op
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Per-operation invocation number assigned at dispatch.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl<T: DeserializeOwned> OperationHandle<T> {
    pub async fn wait(self) -> Result<T, OperationError> {
        let op = self.op;
        let value = match self.join.await {
            Ok(result) => result?,
            Err(e) => {
                tracing::error!(operation = %op, error = %e, "Operation task did not complete");
                return Err(OperationError::logical(format!("{} was interrupted", op.label())));
            }
        };

        serde_json::from_value(value).map_err(|e| {
            tracing::error!(operation = %op, error = %e, "Payload did not match the expected shape");
            OperationError::logical(format!("Unexpected response for {}", op.name))
        })
    }
}

impl<T: DeserializeOwned + Send + 'static> IntoFuture for OperationHandle<T> {
    type Output = Result<T, OperationError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.wait())
    }
}
