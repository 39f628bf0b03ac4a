//! Per-operation lifecycle state.

use crate::core::error::OperationError;

/// Tagged result of an operation invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Pending,
    Fulfilled(T),
    Rejected(OperationError),
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Fulfilled(data) => Outcome::Fulfilled(f(data)),
            Outcome::Rejected(err) => Outcome::Rejected(err),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Fulfilled(data) => Outcome::Fulfilled(data),
            Outcome::Rejected(err) => Outcome::Rejected(err.clone()),
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn error(&self) -> Option<&OperationError> {
        match self {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, OperationError>> for Outcome<T> {
    fn from(result: Result<T, OperationError>) -> Self {
        match result {
            Ok(data) => Outcome::Fulfilled(data),
            Err(err) => Outcome::Rejected(err),
        }
    }
}

/// Projection of a [`SliceState`] onto the lifecycle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Last-known data, loading flag and error for one tracked operation.
///
/// Invariants upheld by [`SliceState::reduce`]:
/// - `is_loading` implies `error.is_none()`
/// - a fulfilled outcome replaces `data` and clears `error`
/// - a rejected outcome clears `is_loading`, sets `error` and leaves `data` untouched
#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<OperationError>,
    settled: bool,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
            settled: false,
        }
    }
}

impl<T> SliceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, outcome: Outcome<T>) {
        match outcome {
            Outcome::Pending => {
                self.is_loading = true;
                self.error = None;
            }
            Outcome::Fulfilled(data) => {
                self.data = Some(data);
                self.is_loading = false;
                self.error = None;
                self.settled = true;
            }
            Outcome::Rejected(err) => {
                self.is_loading = false;
                self.error = Some(err);
                self.settled = true;
            }
        }
    }

    pub fn status(&self) -> SliceStatus {
        if self.is_loading {
            SliceStatus::Loading
        } else if self.error.is_some() {
            SliceStatus::Failure
        } else if self.settled {
            SliceStatus::Success
        } else {
            SliceStatus::Idle
        }
    }

    /// Error message, as shown to the user.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Drop the error; data stays.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Back to `Idle`, forgetting data.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let slice: SliceState<u32> = SliceState::new();
        assert_eq!(slice.status(), SliceStatus::Idle);
        assert!(slice.data.is_none());
    }

    #[test]
    fn test_pending_clears_error() {
        let mut slice = SliceState::new();
        slice.reduce(Outcome::<u32>::Rejected(OperationError::logical("boom")));
        slice.reduce(Outcome::Pending);
        assert!(slice.is_loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.status(), SliceStatus::Loading);
    }

    #[test]
    fn test_fulfilled_stores_data_and_clears_error() {
        let mut slice = SliceState::new();
        slice.reduce(Outcome::Pending);
        slice.reduce(Outcome::Fulfilled(7));
        assert_eq!(slice.data, Some(7));
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.status(), SliceStatus::Success);
    }

    #[test]
    fn test_rejected_keeps_prior_data() {
        let mut slice = SliceState::new();
        slice.reduce(Outcome::Fulfilled(7));
        slice.reduce(Outcome::Pending);
        slice.reduce(Outcome::Rejected(OperationError::http(500, "Server error")));
        assert_eq!(slice.data, Some(7));
        assert!(!slice.is_loading);
        assert_eq!(slice.error_message(), Some("Server error"));
        assert_eq!(slice.status(), SliceStatus::Failure);
    }

    #[test]
    fn test_restart_after_failure() {
        let mut slice = SliceState::new();
        slice.reduce(Outcome::<u32>::Rejected(OperationError::network()));
        slice.reduce(Outcome::Pending);
        assert_eq!(slice.status(), SliceStatus::Loading);
        slice.reduce(Outcome::Fulfilled(1));
        assert_eq!(slice.status(), SliceStatus::Success);
    }

    #[test]
    fn test_clear_error_and_reset() {
        let mut slice = SliceState::new();
        slice.reduce(Outcome::Fulfilled(3));
        slice.reduce(Outcome::Rejected(OperationError::logical("nope")));
        slice.clear_error();
        assert_eq!(slice.status(), SliceStatus::Success);
        assert_eq!(slice.data, Some(3));

        slice.reset();
        assert_eq!(slice.status(), SliceStatus::Idle);
        assert!(slice.data.is_none());
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: Outcome<u8> = Ok(1).into();
        assert_eq!(ok, Outcome::Fulfilled(1));
        let err: Outcome<u8> = Err(OperationError::network()).into();
        assert!(err.is_settled());
        assert!(err.error().is_some());
    }
}
