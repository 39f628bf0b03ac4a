//! # Application Events
//!
//! Lifecycle notifications broadcast to consumers over an unbounded channel.

use serde_json::Value;

use crate::core::error::OperationError;
use crate::operation::{OperationSpec, RequestId};
use crate::session::RestoreResult;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `Pending` was applied for a new invocation
    OperationStarted {
        op: OperationSpec,
        request_id: RequestId,
        sequence: u64,
    },
    /// An invocation settled. `applied` is false when the ordering policy discarded it.
    OperationSettled {
        op: OperationSpec,
        request_id: RequestId,
        sequence: u64,
        result: Result<Value, OperationError>,
        applied: bool,
    },
    /// Startup restoration finished
    SessionRestored(RestoreResult),
    LoggedOut,
}
