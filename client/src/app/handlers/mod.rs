//! # Handlers
//!
//! Typed entry points per domain. Each validates its input locally, then dispatches the
//! catalog endpoint. Validation failures return [`AppError::Validation`](crate::core::error::AppError)
//! and leave the store untouched.

pub mod accounts;
pub mod auth;
pub mod bills;
pub mod transfers;
