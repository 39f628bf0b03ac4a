//! # Banking Client - Library Root
//!
//! Client-side core of the mobile banking app. Business logic lives on the backend;
//! this crate runs every remote operation through one request lifecycle and mirrors
//! the results into an in-memory state store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                banking-client (this crate)               │
//! ├──────────────────────────────────────────────────────────┤
//! │  operation  - Dispatcher: Pending -> Fulfilled/Rejected  │
//! │  store      - AppState slices behind Arc<RwLock<..>>     │
//! │  session    - token + profile persisted across restarts  │
//! │  services   - reqwest HttpExecutor + endpoint catalog    │
//! │  app        - App orchestrator, typed handlers, events   │
//! └──────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON  { status, success, data, message }
//!          ▼
//! ┌──────────────────────┐
//! │  Banking backend     │
//! └──────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] wiring, per-domain handlers with input validation, [`AppEvent`]s
//! - **config**: [`ClientConfig`] from environment variables
//! - **core**: error taxonomy, request/response shapes, executor and auth seams
//! - **debug**: logging setup and tracked task spawning
//! - **operation**: [`Dispatcher`], [`OperationContext`], [`OperationHandle`]
//! - **services**: [`ApiClient`](services::api::ApiClient) and the endpoint catalog
//! - **session**: [`SessionBridge`] and storage backends
//! - **store**: [`Store`], [`AppState`] and the slice reducers
//! - **utils**: input validation

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod operation;
pub mod services;
pub mod session;
pub mod store;
pub mod utils;

pub use app::{App, AppEvent};
pub use config::ClientConfig;
pub use crate::core::error::{AppError, ErrorKind, OperationError, Result};
pub use operation::{Dispatcher, Endpoint, OperationContext, OperationHandle, OperationSpec, OrderingPolicy};
pub use session::{RestoreResult, SessionBridge};
pub use store::{AppState, Domain, Store};
