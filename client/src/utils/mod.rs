//! # Utility Functions
//!
//! - **[`validation`]**: Input validation run before an operation is dispatched
//!
//! See also [`shared::utils`] for display helpers (account number masking).

pub mod validation;
