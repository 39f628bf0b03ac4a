//! Operation identity: names, REST endpoints, correlation ids and ordering policy.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::core::error::AppError;
use crate::core::http::HttpMethod;
use crate::store::Domain;

/// A uniquely named unit of asynchronous work within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationSpec {
    pub domain: Domain,
    pub name: &'static str,
}

impl OperationSpec {
    pub const fn new(domain: Domain, name: &'static str) -> Self {
        Self { domain, name }
    }

    /// Human label derived from the name: `validate_account` -> `Validate account`.
    pub fn label(&self) -> String {
        let spaced = self.name.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Reason used when the backend gives none: `"<Operation> failed (<status>)"`.
    pub fn failure_message(&self, status: u16) -> String {
        format!("{} failed ({})", self.label(), status)
    }
}

impl fmt::Display for OperationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.name)
    }
}

/// A REST-backed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub op: OperationSpec,
    pub method: HttpMethod,
    /// Path relative to the configured base URL, starting with `/`
    pub path: &'static str,
    /// Whether the bearer token is attached
    pub authenticated: bool,
}

impl Endpoint {
    pub const fn new(domain: Domain, name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            op: OperationSpec::new(domain, name),
            method,
            path,
            authenticated: true,
        }
    }

    /// Same endpoint without the bearer token (login, registration).
    pub const fn public(self) -> Self {
        Self {
            authenticated: false,
            ..self
        }
    }
}

/// Correlation id of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How settled outcomes of overlapping invocations of the same operation are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingPolicy {
    /// Apply every outcome in arrival order; whichever resolves last wins.
    #[default]
    LastArrivalWins,
    /// Drop outcomes of invocations superseded by a newer invocation of the same operation.
    DiscardStale,
}

impl FromStr for OrderingPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-arrival" | "last_arrival" => Ok(OrderingPolicy::LastArrivalWins),
            "discard-stale" | "discard_stale" => Ok(OrderingPolicy::DiscardStale),
            other => Err(AppError::Config(format!(
                "BANKING_ORDERING must be 'last-arrival' or 'discard-stale', got '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_failure_message() {
        let op = OperationSpec::new(Domain::Accounts, "validate_account");
        assert_eq!(op.label(), "Validate account");
        assert_eq!(op.failure_message(500), "Validate account failed (500)");
        assert_eq!(OperationSpec::new(Domain::Auth, "login").failure_message(404), "Login failed (404)");
    }

    #[test]
    fn test_display() {
        assert_eq!(OperationSpec::new(Domain::Bills, "pay_bill").to_string(), "bills/pay_bill");
    }

    #[test]
    fn test_public_endpoint_drops_auth() {
        const LOGIN: Endpoint = Endpoint::new(Domain::Auth, "login", HttpMethod::Post, "/auth/login").public();
        assert!(!LOGIN.authenticated);
        assert_eq!(LOGIN.op.name, "login");
    }

    #[test]
    fn test_ordering_policy_parse() {
        assert_eq!("discard-stale".parse::<OrderingPolicy>().unwrap(), OrderingPolicy::DiscardStale);
        assert_eq!(" Last-Arrival ".parse::<OrderingPolicy>().unwrap(), OrderingPolicy::LastArrivalWins);
        assert!("newest".parse::<OrderingPolicy>().is_err());
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
