use crate::config::Config;
use crate::error::{DeenError, Result};
use crate::page::{self, AppState};
use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;

/// Build the router serving the page, its actions and the static assets.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::load_page))
        .route("/prayer/location", get(page::prayer_by_location))
        .route("/prayer/city", get(page::prayer_by_city))
        .route("/quran", get(page::select_surah))
        .route("/hadith/random", get(page::random_hadith))
        .route("/api/page", get(page::page_snapshot))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

/// Run the web server on the specified port.
///
/// # Arguments
///
/// * `port` - The port number to bind the server to
/// * `config_file_path` - JSON5 configuration to load; defaults are used when `None`
/// * `cancel_token` - Cancelling it shuts the server down gracefully
///
/// # Returns
///
/// Returns `Ok(())` once the server has shut down, or a `DeenError` if an error occurs
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded or is invalid
/// - The address string cannot be parsed into a valid `SocketAddr`
/// - The server fails to bind to the specified address
pub async fn run(
    port: u16,
    config_file_path: Option<PathBuf>,
    cancel_token: CancellationToken,
) -> Result<()> {
    tracing::info!("Initializing server");

    let config = Config::load_or_default(config_file_path.as_deref())?;

    let addr = format!("0.0.0.0:{port}");
    let address: std::net::SocketAddr = addr.parse()?;
    tracing::info!("Binding server to address: {address}");
    let listener = TcpListener::bind(address)
        .await
        .map_err(DeenError::ServerRun)?;

    tracing::info!("Site launched on: http://{addr}");
    serve(listener, &config, cancel_token).await
}

/// Serve the dashboard described by `config` on an already bound listener.
///
/// # Errors
///
/// Returns an error if the API client cannot be built or the server stops abnormally
pub async fn serve(
    listener: TcpListener,
    config: &Config,
    cancel_token: CancellationToken,
) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);
    tracing::debug!("Routes configured");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await
        .map_err(DeenError::ServerRun)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
