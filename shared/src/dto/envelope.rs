//! Response envelope used by every backend endpoint.

use serde::{Deserialize, Serialize};

/// `{ status, success, data?, message? }` wrapper around every API response.
///
/// `success=true` implies `data` is present and authoritative; `success=false`
/// implies `message` explains the failure and `data` must be ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success".to_string(),
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Failed envelope carrying only a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Attach a message to the envelope.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Split the envelope into its authoritative data or the failure message.
    ///
    /// `Err(None)` means the backend reported failure (or omitted `data`) without
    /// explaining why.
    pub fn into_result(self) -> Result<T, Option<String>> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.message.filter(|m| !m.trim().is_empty())),
        }
    }
}
