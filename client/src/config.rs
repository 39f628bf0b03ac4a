//! # Client Configuration
//!
//! Configuration loaded from environment variables. Validated once at startup so a
//! misconfigured client fails before the first request.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BANKING_API_URL` | `http://127.0.0.1:3001/api` | Backend base URL |
//! | `BANKING_DATA_DIR` | `<platform data dir>/banking-client` | Where the session file lives |
//! | `BANKING_HTTP_TIMEOUT_SECS` | unset | Per-request timeout; unset uses the platform default |
//! | `BANKING_ORDERING` | `last-arrival` | `last-arrival` or `discard-stale` |
//!
//! The configuration is passed explicitly to [`crate::app::App::new`]; there is
//! no global instance.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::operation::OrderingPolicy;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001/api";

/// File name of the persisted session inside the data directory.
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,

    /// Directory for durable on-device state
    pub data_dir: PathBuf,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,

    /// How outcomes of overlapping invocations of one operation are applied
    pub ordering: OrderingPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            request_timeout: None,
            ordering: OrderingPolicy::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("banking-client")
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("BANKING_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let data_dir = env::var("BANKING_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let request_timeout = match env::var("BANKING_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    AppError::Config(format!("BANKING_HTTP_TIMEOUT_SECS must be a number: {}", e))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let ordering = match env::var("BANKING_ORDERING") {
            Ok(raw) => raw.parse()?,
            Err(_) => OrderingPolicy::default(),
        };

        let config = Self {
            api_base_url,
            data_dir,
            request_timeout,
            ordering,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BANKING_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config(
                "BANKING_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the persisted session document.
    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.ordering, OrderingPolicy::LastArrivalWins);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = ClientConfig {
            api_base_url: "ftp://bank".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Some(Duration::ZERO),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_file_lives_in_data_dir() {
        let config = ClientConfig {
            data_dir: PathBuf::from("/tmp/bank"),
            ..ClientConfig::default()
        };
        assert_eq!(config.session_file(), PathBuf::from("/tmp/bank/session.json"));
    }
}
