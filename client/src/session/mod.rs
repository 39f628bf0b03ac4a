//! # Persisted Session
//!
//! The auth token and last known profile survive restarts through a [`SessionStorage`].
//! [`SessionBridge`] writes settled auth outcomes through to storage and restores them
//! into the store at startup.

pub mod bridge;
pub mod storage;

pub use bridge::{RestoreResult, SessionBridge, PROFILE_KEY, TOKEN_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
