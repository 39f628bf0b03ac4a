//! Diagnostic entry point: loads configuration, sets up logging and restores the
//! persisted session against the configured backend.

use std::process::ExitCode;

use banking_client::debug::{self, DebugConfig};
use banking_client::{App, ClientConfig, RestoreResult};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let _log_guard = match debug::init_logger(&DebugConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        api_url = %config.api_base_url,
        session_file = %config.session_file().display(),
        ordering = ?config.ordering,
        "Starting banking client"
    );

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match app.start().await {
        RestoreResult::Authenticated { user } => {
            let name = user.map(|u| u.full_name()).unwrap_or_else(|| "unknown user".to_string());
            println!("Session restored for {}", name);
        }
        RestoreResult::Unauthenticated { cached_user: Some(user) } => {
            println!("Signed out. Last signed in as {}", user.full_name());
        }
        RestoreResult::Unauthenticated { cached_user: None } => {
            println!("No saved session");
        }
    }

    tracing::info!(active_tasks = debug::active_task_count(), "Done");
    ExitCode::SUCCESS
}
