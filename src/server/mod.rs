mod handlers;
mod routes;
mod shutdown;

pub use routes::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::notion::{ContentApi, NotionClient};

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    pub api: Arc<dyn ContentApi>,
}

impl AppState {
    pub fn new(settings: Settings, api: Arc<dyn ContentApi>) -> Self {
        Self { settings, api }
    }
}

/// Run the relay server
pub async fn run_server(addr: SocketAddr, settings: Settings) -> Result<()> {
    if let Err(e) = settings.require() {
        tracing::warn!("{}; /read and /create will fail until it is set", e);
    }

    let api = Arc::new(NotionClient::from_settings(&settings));
    let state = Arc::new(AppState::new(settings, api));

    let app = create_router(state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
