//! # Diagnostics
//!
//! File-based structured logging and tracked task spawning.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `banking_client=info,warn`)
//! - `BANKING_LOG_DIR`: Directory for the rotating log (default `logs`)
//! - `BANKING_LOG_STDERR`: Mirror logs to stderr (1=on)
//! - `BANKING_LOG_JSON`: JSON lines in the log file (1=on)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::{init as init_logger, LogGuard};
pub use task_tracker::{active_task_count, spawn_tracked};
