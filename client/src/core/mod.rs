//! # Core Abstractions
//!
//! Foundational types used throughout the client:
//!
//! - **[`error`]**: `OperationError` (tagged request failures), `TransportError`, `AppError`
//! - **[`http`]**: `HttpRequest` / `HttpResponse` shapes
//! - **[`service`]**: `HttpExecutor` and `AuthContext` traits for dependency injection
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use banking_client::core::service::HttpExecutor;
//!
//! // In production: the reqwest-backed client
//! let executor: Arc<dyn HttpExecutor> = Arc::new(ApiClient::new(&config)?);
//!
//! // In tests: a scripted executor
//! let executor: Arc<dyn HttpExecutor> = Arc::new(ScriptedExecutor::default());
//! ```

pub mod error;
pub mod http;
pub mod service;

pub use error::{AppError, ErrorKind, OperationError, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{AuthContext, HttpExecutor, StaticToken};
