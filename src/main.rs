use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vitalcheck::api::RestApi;
use vitalcheck::config::{load_config, LoggingConfig};
use vitalcheck::history::{HistoryBuffer, IntakeService};
use vitalcheck::VitalcheckError;

fn init_logging(logging: &LoggingConfig) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), VitalcheckError> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.yaml"));
    let config = load_config(&config_path)?;

    init_logging(&config.logging);
    info!(config = %config_path.display(), "starting vitalcheck");

    let history = Arc::new(HistoryBuffer::new(config.history.capacity));
    let service = IntakeService::new(Arc::clone(&history));

    let mut api = RestApi::new(service);
    if let Some(dir) = &config.api.static_dir {
        info!(dir = %dir.display(), "serving dashboard files");
        api = api.with_static_dir(dir.clone());
    }

    let addr = config.listen_addr()?;

    // Create a channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let (bound, server) = warp::serve(api.routes())
        .try_bind_with_graceful_shutdown(addr, async move {
            shutdown_rx.await.ok();
            info!("shutting down server");
        })
        .map_err(|e| VitalcheckError::Server(e.to_string()))?;

    info!(%bound, capacity = history.capacity(), "listening");
    let server_handle = tokio::spawn(server);

    signal::ctrl_c().await?;
    info!("ctrl+c received, starting graceful shutdown");

    if shutdown_tx.send(()).is_err() {
        warn!("server already stopped");
    }

    server_handle
        .await
        .map_err(|e| VitalcheckError::Server(e.to_string()))?;

    info!(checks = history.len(), "server shutdown complete");
    Ok(())
}
