use std::io;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::routes::create_routes;
use crate::config::AppConfig;
use crate::services::TrackerService;

/// Binds the configured address. If the port is already taken and fallback
/// is enabled, the next port is tried once.
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener> {
    let address = config.server_address();
    match TcpListener::bind(&address).await {
        Ok(listener) => Ok(listener),
        Err(err) if err.kind() == io::ErrorKind::AddrInUse => {
            let Some(fallback) = config.fallback_address() else {
                return Err(err).with_context(|| format!("Failed to bind {}", address));
            };
            warn!("Port {} in use - trying {}", config.port, fallback);
            TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("Failed to bind fallback address {}", fallback))
        }
        Err(err) => Err(err).with_context(|| format!("Failed to bind {}", address)),
    }
}

/// Serves a fresh in-memory tracker until the process is stopped.
pub async fn run(config: AppConfig) -> Result<()> {
    let app = create_routes(TrackerService::in_memory(), &config.public_dir);

    let listener = bind_listener(&config).await?;
    let local_addr = listener.local_addr()?;
    info!("Exercise tracker listening on http://{}", local_addr);
    info!("Health check available at http://{}/health", local_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
