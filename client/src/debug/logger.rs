//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_FILTER, LOG_FILE_PREFIX};
use crate::core::error::{AppError, Result};

/// Keeps the non-blocking writer flushing. Drop it only at shutdown.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Initialize the logging system
///
/// Sets up:
/// - daily rotation of `<log_dir>/banking-client.log`, written off-thread
/// - plain or JSON lines in the file, optionally mirrored to stderr
/// - a panic hook that records panics in the log
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &DebugConfig) -> Result<LogGuard> {
    fs::create_dir_all(&config.log_dir)
        .map_err(|e| AppError::storage(format!("cannot create log directory {}", config.log_dir.display()), e))?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (json_layer, text_layer) = if config.json {
        let layer = fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_current_span(true)
            .with_target(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);
        (None, Some(layer))
    };

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        json = config.json,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    Ok(LogGuard { _file: guard })
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(location = %location, message = %message, backtrace = %backtrace, "Application panic");

        default_panic(panic_info);
    }));
}
