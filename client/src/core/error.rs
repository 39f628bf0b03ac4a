//! # Common Error Types
//!
//! Error handling for the banking client.
//!
//! Three layers of errors exist, one per boundary:
//!
//! - [`TransportError`]: raised by the HTTP executor when no response was received
//!   at all (connectivity, DNS, timeout). HTTP 4xx/5xx are *not* transport errors.
//! - [`OperationError`]: the tagged failure an operation settles with. Every
//!   failure path (transport, HTTP status, envelope `success:false`) ends here, and
//!   this is what the state store keeps in a slice's `error` field.
//! - [`AppError`]: crate-level failures outside the request lifecycle
//!   (configuration, storage, input validation, logging setup).
//!
//! ## Branching on failures
//!
//! Consumers branch on [`ErrorKind`] instead of parsing message text:
//!
//! ```rust
//! use banking_client::core::error::{ErrorKind, OperationError};
//!
//! let err = OperationError::http(401, "Session expired");
//! assert_eq!(err.kind, ErrorKind::AuthExpired);
//! assert_eq!(err.to_string(), "Session expired");
//! ```

use thiserror::Error;

/// Generic reason surfaced for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";

/// Category of an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response received (no connectivity, DNS, timeout)
    NetworkError,
    /// HTTP 4xx/5xx other than 401
    HttpError,
    /// HTTP success, but the envelope reported `success:false`, omitted `data`,
    /// or the payload could not be decoded
    LogicalError,
    /// HTTP 401
    AuthExpired,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "network_error",
            ErrorKind::HttpError => "http_error",
            ErrorKind::LogicalError => "logical_error",
            ErrorKind::AuthExpired => "auth_expired",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged failure of a single operation invocation.
///
/// `Display` is the user-facing message, shown verbatim by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    pub kind: ErrorKind,
    pub message: String,
    pub status_code: Option<u16>,
}

impl OperationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
        }
    }

    /// Transport failure with the generic connectivity message.
    pub fn network() -> Self {
        Self::new(ErrorKind::NetworkError, NETWORK_ERROR_MESSAGE)
    }

    /// Non-2xx response. 401 maps to [`ErrorKind::AuthExpired`].
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        let kind = if status == 401 {
            ErrorKind::AuthExpired
        } else {
            ErrorKind::HttpError
        };
        Self::new(kind, message).with_status(status)
    }

    pub fn logical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LogicalError, message)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn is_auth_expired(&self) -> bool {
        self.kind == ErrorKind::AuthExpired
    }
}

/// Failure to obtain any HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl From<TransportError> for OperationError {
    fn from(_: TransportError) -> Self {
        OperationError::network()
    }
}

/// Crate-level error type for everything outside the request lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid configuration (environment variables, URLs).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable storage could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input rejected locally before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl AppError {
    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Storage {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_401_is_auth_expired() {
        let err = OperationError::http(401, "Unauthorized");
        assert!(err.is_auth_expired());
        assert_eq!(err.status_code, Some(401));
    }

    #[test]
    fn test_http_other_status_is_http_error() {
        let err = OperationError::http(503, "Service unavailable");
        assert_eq!(err.kind, ErrorKind::HttpError);
        assert_eq!(err.status_code, Some(503));
    }

    #[test]
    fn test_transport_error_becomes_generic_network_error() {
        let err: OperationError = TransportError::Connect("refused".to_string()).into();
        assert_eq!(err.kind, ErrorKind::NetworkError);
        assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
        assert_eq!(err.status_code, None);
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::Validation("Passcode must be 4 digits".to_string()).to_string(),
            "Validation error: Passcode must be 4 digits"
        );
        let op: AppError = OperationError::logical("Invalid customer").into();
        assert_eq!(op.to_string(), "Invalid customer");
    }
}
