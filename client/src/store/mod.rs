//! # Domain State Store
//!
//! Shared, injected state container mirroring server responses.
//!
//! ```text
//! Store (Arc<RwLock<AppState>>)
//! ├── auth: AuthSlice            token, profile, auth request lifecycle
//! └── domains: Domain -> DomainSlice
//!                  └── operation name -> SliceState<Value>
//! ```
//!
//! Every slice is updated only by the reducer, in response to the three outcomes of
//! its own operations: `Pending`, `Fulfilled(data)`, `Rejected(error)`.
//!
//! ## Locking
//!
//! The lock is a `parking_lot::RwLock` held only for the duration of a reducer call
//! or a read closure. It is never held across an `.await`.
//!
//! ```rust
//! use banking_client::store::{Domain, Store};
//!
//! let store = Store::new();
//! let loading = store.read(|state| state.domain(Domain::Bills).is_loading());
//! assert!(!loading);
//! ```

pub mod auth;
pub mod domain;
pub mod slice;
pub mod state;

pub use auth::{AuthSlice, Session};
pub use domain::{Domain, DomainSlice};
pub use slice::{Outcome, SliceState, SliceStatus};
pub use state::{Action, AppState};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::service::AuthContext;
use crate::operation::{OperationSpec, OrderingPolicy, RequestId};

/// Cloneable handle to the application state.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Owned copy of the whole state.
    pub fn snapshot(&self) -> AppState {
        self.inner.read().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Apply an action unconditionally.
    pub fn apply(&self, action: &Action) {
        self.inner.write().reduce(action)
    }

    pub(crate) fn begin(&self, op: OperationSpec, request_id: RequestId) -> Action {
        self.inner.write().begin(op, request_id)
    }

    pub(crate) fn settle(&self, action: &Action, policy: OrderingPolicy) -> bool {
        self.inner.write().settle(action, policy)
    }

    pub fn auth(&self) -> AuthSlice {
        self.inner.read().auth.clone()
    }

    pub fn domain(&self, domain: Domain) -> DomainSlice {
        self.inner.read().domain(domain)
    }
}

impl AuthContext for Store {
    fn bearer_token(&self) -> Option<String> {
        self.inner.read().auth.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        store.update(|s| {
            s.auth.hydrate(Session {
                token: Some("abc".to_string()),
                user: None,
            })
        });
        assert_eq!(other.bearer_token().as_deref(), Some("abc"));
        assert!(other.auth().is_authenticated);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = Store::new();
        let before = store.snapshot();
        store.update(|s| s.auth.requires_passcode_setup = true);
        assert!(!before.auth.requires_passcode_setup);
        assert!(store.read(|s| s.auth.requires_passcode_setup));
    }
}
