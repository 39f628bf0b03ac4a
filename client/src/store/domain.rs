//! Feature domains and the generic slice every non-auth domain uses.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::slice::{Outcome, SliceState, SliceStatus};
use crate::core::error::OperationError;

/// Feature areas of the app, one state slice each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Auth,
    Accounts,
    Bills,
    Cards,
    VirtualCards,
    Gold,
    Kyc,
    Loans,
    Transfers,
    Statements,
    Beneficiaries,
}

impl Domain {
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Auth,
            Domain::Accounts,
            Domain::Bills,
            Domain::Cards,
            Domain::VirtualCards,
            Domain::Gold,
            Domain::Kyc,
            Domain::Loans,
            Domain::Transfers,
            Domain::Statements,
            Domain::Beneficiaries,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Auth => "auth",
            Domain::Accounts => "accounts",
            Domain::Bills => "bills",
            Domain::Cards => "cards",
            Domain::VirtualCards => "virtual_cards",
            Domain::Gold => "gold",
            Domain::Kyc => "kyc",
            Domain::Loans => "loans",
            Domain::Transfers => "transfers",
            Domain::Statements => "statements",
            Domain::Beneficiaries => "beneficiaries",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one domain: a lifecycle record per operation it has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainSlice {
    operations: BTreeMap<&'static str, SliceState<Value>>,
    last_settled: Option<&'static str>,
}

impl DomainSlice {
    pub fn reduce(&mut self, operation: &'static str, outcome: Outcome<Value>) {
        if outcome.is_settled() {
            self.last_settled = Some(operation);
        }
        self.operations.entry(operation).or_default().reduce(outcome);
    }

    pub fn operation(&self, operation: &str) -> Option<&SliceState<Value>> {
        self.operations.get(operation)
    }

    /// Last fulfilled payload of `operation`.
    pub fn data(&self, operation: &str) -> Option<&Value> {
        self.operation(operation).and_then(|s| s.data.as_ref())
    }

    pub fn status(&self, operation: &str) -> SliceStatus {
        self.operation(operation)
            .map(SliceState::status)
            .unwrap_or(SliceStatus::Idle)
    }

    /// Whether any operation of the domain is in flight.
    pub fn is_loading(&self) -> bool {
        self.operations.values().any(|s| s.is_loading)
    }

    /// Error of the most recently settled operation, if it failed and has not restarted.
    pub fn error(&self) -> Option<&OperationError> {
        self.last_settled
            .and_then(|name| self.operations.get(name))
            .and_then(|s| s.error.as_ref())
    }

    /// Drop every error in the domain; data stays.
    pub fn clear_error(&mut self) {
        self.operations.values_mut().for_each(SliceState::clear_error);
    }

    /// Forget one operation entirely (e.g. a validation result once the form is left).
    pub fn clear_operation(&mut self, operation: &str) {
        self.operations.remove(operation);
        if self.last_settled == Some(operation) {
            self.last_settled = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
