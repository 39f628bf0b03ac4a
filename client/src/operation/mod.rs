//! # Async Operation Wrapper
//!
//! Every backend call runs as a named operation. Dispatching one:
//!
//! 1. applies `Pending` to the store synchronously
//! 2. runs the operation body on a tracked task with an [`OperationContext`]
//! 3. validates the response against the envelope contract
//! 4. applies `Fulfilled(data)` or `Rejected(error)` and resolves the [`OperationHandle`]
//!
//! Each invocation carries a [`RequestId`] and a per-operation sequence number. With
//! [`OrderingPolicy::DiscardStale`] an outcome is dropped from the store when a newer
//! invocation of the same operation exists.

pub mod context;
pub mod dispatcher;
pub mod handle;
pub(crate) mod resolve;
pub mod spec;

pub use context::OperationContext;
pub use dispatcher::Dispatcher;
pub use handle::OperationHandle;
pub use spec::{Endpoint, OperationSpec, OrderingPolicy, RequestId};
