//! Authentication slice: session token, cached profile and auth request lifecycle.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{AuthData, UserProfile};

use super::slice::{Outcome, SliceState};
use crate::core::error::OperationError;
use crate::services::api::catalog::auth as ops;

/// Token and profile, as held in memory and mirrored to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSlice {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub requires_passcode_setup: bool,
    /// Lifecycle of the most recent auth operation; data is its raw payload
    pub request: SliceState<Value>,
}

impl AuthSlice {
    pub fn is_loading(&self) -> bool {
        self.request.is_loading
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.request.error.as_ref()
    }

    pub fn session(&self) -> Session {
        Session {
            token: self.token.clone(),
            user: self.user.clone(),
        }
    }

    /// Seed from durable storage at startup.
    pub fn hydrate(&mut self, session: Session) {
        self.is_authenticated = session.token.is_some();
        self.token = session.token;
        self.user = session.user;
    }

    /// Drop the token, keep the profile.
    pub fn invalidate_token(&mut self) {
        self.token = None;
        self.is_authenticated = false;
    }

    /// Local logout. The profile stays so the device keeps showing the last identity.
    pub fn logout(&mut self) {
        self.invalidate_token();
        self.requires_passcode_setup = false;
        self.request.reset();
    }

    pub fn clear_error(&mut self) {
        self.request.clear_error();
    }

    pub fn reduce(&mut self, operation: &'static str, outcome: Outcome<Value>) {
        let data = match outcome {
            Outcome::Fulfilled(data) => data,
            Outcome::Rejected(err) => {
                if operation == ops::GET_PROFILE.op.name && err.is_auth_expired() {
                    tracing::warn!(operation, "Profile fetch returned 401 - clearing session token");
                    self.invalidate_token();
                }
                return self.request.reduce(Outcome::Rejected(err));
            }
            Outcome::Pending => return self.request.reduce(Outcome::Pending),
        };

        match operation {
            name if name == ops::LOGIN.op.name || name == ops::REGISTER.op.name => {
                match decode::<AuthData>(operation, &data) {
                    Ok(auth) => {
                        self.token = Some(auth.access_token);
                        self.user = Some(auth.user);
                        self.is_authenticated = true;
                        self.requires_passcode_setup = auth.requires_passcode_setup;
                    }
                    Err(err) => return self.request.reduce(Outcome::Rejected(err)),
                }
            }
            name if name == ops::GET_PROFILE.op.name || name == ops::UPDATE_PROFILE.op.name => {
                match decode::<UserProfile>(operation, &data) {
                    Ok(user) => self.user = Some(user),
                    Err(err) => return self.request.reduce(Outcome::Rejected(err)),
                }
            }
            name if name == ops::SET_PASSCODE.op.name => {
                self.requires_passcode_setup = false;
            }
            name if name == ops::CHANGE_PASSCODE.op.name => {
                self.invalidate_token();
            }
            _ => {}
        }

        self.request.reduce(Outcome::Fulfilled(data));
    }
}

fn decode<T: DeserializeOwned>(operation: &str, data: &Value) -> Result<T, OperationError> {
    serde_json::from_value(data.clone()).map_err(|e| {
        tracing::error!(operation, error = %e, "Auth payload did not match the expected shape");
        OperationError::logical(format!("Unexpected response for {}", operation))
    })
}
