//! # Shared Wire Contract
//!
//! This library defines the contract between the banking client and the backend API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{status, success, data, message}` wrapper around every response
//!   - **[`dto::auth`]**: Login, registration, profile and passcode DTOs
//!   - **[`dto::accounts`]**: Account listing and account-number validation
//!   - **[`dto::bills`]**: Biller customer validation and bill payment
//!   - **[`dto::transfers`]**: Transfers and statements
//! - **[`utils`]**: Display helpers
//!   - **[`utils::mask_account_number`]**: Hide all but the last digits of an account number
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Optional fields are omitted from JSON when `None`
//! - Every response body is an [`Envelope`]; `success=true` implies `data` is present
//!
//! ## Usage in the Client
//!
//! ```rust,no_run
//! use shared::{Envelope, LoginRequest, AuthData};
//!
//! let request = LoginRequest {
//!     email_or_phone: "ada@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_value(&request).unwrap();
//!
//! let raw = r#"{"status":"ok","success":false,"message":"Invalid credentials"}"#;
//! let envelope: Envelope<AuthData> = serde_json::from_str(raw).unwrap();
//! assert!(envelope.into_result().is_err());
//! # let _ = body;
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where every export is public API
pub use dto::*;
pub use utils::*;
