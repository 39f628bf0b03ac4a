//! # Application State
//!
//! The root of all slices plus the reducer that routes outcomes to them.

use std::collections::HashMap;

use serde_json::Value;

use super::auth::AuthSlice;
use super::domain::{Domain, DomainSlice};
use super::slice::Outcome;
use crate::operation::{OperationSpec, OrderingPolicy, RequestId};

/// An outcome addressed to one invocation of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub op: OperationSpec,
    pub request_id: RequestId,
    /// Per-operation invocation counter, starting at 1
    pub sequence: u64,
    pub outcome: Outcome<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthSlice,
    domains: HashMap<Domain, DomainSlice>,
    sequences: HashMap<OperationSpec, u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice of a non-auth domain. Domains that never ran anything read as empty.
    pub fn domain(&self, domain: Domain) -> DomainSlice {
        self.domains.get(&domain).cloned().unwrap_or_default()
    }

    pub fn domain_mut(&mut self, domain: Domain) -> &mut DomainSlice {
        self.domains.entry(domain).or_default()
    }

    /// Sequence number of the newest invocation of `op`, 0 if never invoked.
    pub fn latest_sequence(&self, op: OperationSpec) -> u64 {
        self.sequences.get(&op).copied().unwrap_or(0)
    }

    /// Register a new invocation and apply its `Pending` outcome.
    pub fn begin(&mut self, op: OperationSpec, request_id: RequestId) -> Action {
        let sequence = self.sequences.entry(op).or_insert(0);
        *sequence += 1;
        let action = Action {
            op,
            request_id,
            sequence: *sequence,
            outcome: Outcome::Pending,
        };
        self.reduce(&action);
        action
    }

    /// Apply a settled outcome. Returns `false` when the policy discarded it.
    pub fn settle(&mut self, action: &Action, policy: OrderingPolicy) -> bool {
        if policy == OrderingPolicy::DiscardStale && action.sequence < self.latest_sequence(action.op) {
            return false;
        }
        self.reduce(action);
        true
    }

    pub fn reduce(&mut self, action: &Action) {
        let outcome = action.outcome.clone();
        match action.op.domain {
            Domain::Auth => self.auth.reduce(action.op.name, outcome),
            domain => self.domain_mut(domain).reduce(action.op.name, outcome),
        }
    }

    pub fn clear_error(&mut self, domain: Domain) {
        match domain {
            Domain::Auth => self.auth.clear_error(),
            domain => self.domain_mut(domain).clear_error(),
        }
    }

    /// Forget a single operation's state (validation results, one-off lookups).
    pub fn clear_operation(&mut self, op: OperationSpec) {
        match op.domain {
            Domain::Auth => self.auth.request.reset(),
            domain => self.domain_mut(domain).clear_operation(op.name),
        }
    }

    /// Full logout: token dropped, profile kept, every domain slice reset.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.domains.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::OperationError;
    use crate::store::SliceStatus;
    use serde_json::json;

    const VALIDATE: OperationSpec = OperationSpec::new(Domain::Accounts, "validate_account");

    fn settled(begun: &Action, outcome: Outcome<Value>) -> Action {
        Action {
            outcome,
            ..begun.clone()
        }
    }

    #[test]
    fn test_begin_marks_loading_and_counts() {
        let mut state = AppState::new();
        let first = state.begin(VALIDATE, RequestId::new());
        let second = state.begin(VALIDATE, RequestId::new());
        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(state.domain(Domain::Accounts).status("validate_account"), SliceStatus::Loading);
    }

    #[test]
    fn test_last_arrival_wins_applies_stale_outcome() {
        let mut state = AppState::new();
        let first = state.begin(VALIDATE, RequestId::new());
        let second = state.begin(VALIDATE, RequestId::new());

        assert!(state.settle(&settled(&second, Outcome::Fulfilled(json!("new"))), OrderingPolicy::LastArrivalWins));
        assert!(state.settle(&settled(&first, Outcome::Fulfilled(json!("old"))), OrderingPolicy::LastArrivalWins));
        assert_eq!(state.domain(Domain::Accounts).data("validate_account"), Some(&json!("old")));
    }

    #[test]
    fn test_discard_stale_drops_superseded_outcome() {
        let mut state = AppState::new();
        let first = state.begin(VALIDATE, RequestId::new());
        let second = state.begin(VALIDATE, RequestId::new());

        assert!(state.settle(&settled(&second, Outcome::Fulfilled(json!("new"))), OrderingPolicy::DiscardStale));
        assert!(!state.settle(&settled(&first, Outcome::Fulfilled(json!("old"))), OrderingPolicy::DiscardStale));
        assert_eq!(state.domain(Domain::Accounts).data("validate_account"), Some(&json!("new")));
    }

    #[test]
    fn test_routes_auth_to_auth_slice() {
        let mut state = AppState::new();
        let op = OperationSpec::new(Domain::Auth, "verify_passcode");
        let begun = state.begin(op, RequestId::new());
        assert!(state.auth.is_loading());
        state.settle(&settled(&begun, Outcome::Rejected(OperationError::logical("Wrong passcode"))), OrderingPolicy::LastArrivalWins);
        assert_eq!(state.auth.error().map(|e| e.message.as_str()), Some("Wrong passcode"));
    }

    #[test]
    fn test_logout_resets_domains() {
        let mut state = AppState::new();
        let begun = state.begin(VALIDATE, RequestId::new());
        state.settle(&settled(&begun, Outcome::Fulfilled(json!({"account_name": "Ada"}))), OrderingPolicy::LastArrivalWins);
        state.logout();
        assert_eq!(state.domain(Domain::Accounts), DomainSlice::default());
    }

    #[test]
    fn test_clear_error_by_domain() {
        let mut state = AppState::new();
        let begun = state.begin(VALIDATE, RequestId::new());
        state.settle(&settled(&begun, Outcome::Rejected(OperationError::network())), OrderingPolicy::LastArrivalWins);
        state.clear_error(Domain::Accounts);
        assert!(state.domain(Domain::Accounts).error().is_none());
    }
}
