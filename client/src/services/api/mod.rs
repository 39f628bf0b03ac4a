//! # Backend API
//!
//! ```text
//! api/
//! ├── client.rs   - ApiClient, the reqwest HttpExecutor
//! └── catalog.rs  - every endpoint, grouped by domain
//! ```

pub mod catalog;
pub mod client;

pub use client::ApiClient;
