//! # Deen Dashboard Main Application Entry Point
//!
//! This is the main executable for the Deen Dashboard application.
//! It handles command-line argument parsing, tracing initialization,
//! server startup, and application lifecycle management.
//!
//! The application can be launched with optional command-line arguments:
//!
//! - First argument: Port number (defaults to 3000)
//! - Second argument: Path to configuration file (defaults are used when omitted)
//!
//! ## Example Usage
//!
//! ```bash
//! # Run with default settings (port 3000, built-in defaults)
//! cargo run
//!
//! # Run on a specific port
//! cargo run 8080
//!
//! # Run with a specific port and configuration file
//! cargo run 8080 config.json5
//! ```
//!
//! Log levels can be controlled through the `RUST_LOG` environment variable.

use deen_dashboard::{error::DeenError, server};
use std::env;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), DeenError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let config_file_path: Option<PathBuf> = env::args().nth(2).map(PathBuf::from);

    tracing::info!("Starting Deen Dashboard");

    let cancel_token = CancellationToken::new();
    tokio::spawn({
        let cancel_token = cancel_token.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
                return;
            }
            tracing::info!("Shutdown signal received");
            cancel_token.cancel();
        }
    });

    server::run(port, config_file_path, cancel_token).await?;

    tracing::info!("Deen Dashboard shutting down");
    Ok(())
}
