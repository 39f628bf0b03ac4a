//! # Services Module
//!
//! External service integrations. Today that is the banking backend over HTTP/JSON.

pub mod api;
