use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;

pub async fn serve(settings: Settings) -> Result<()> {
    trace!("Entering serve function");
    info!("StockCast dashboard starting up");
    debug!("Artifact root: {}", settings.artifacts.root.display());
    debug!("Bind address: {}", settings.bind_address);

    if !settings.artifacts.root.is_dir() {
        // Sections will render as warnings until the artifacts appear
        error!(
            "Artifact root {} is not a directory",
            settings.artifacts.root.display()
        );
    }
    if !settings.static_dir.is_dir() {
        info!(
            "Frontend bundle not found at {}, only the API is served",
            settings.static_dir.display()
        );
    }

    let bind_address = settings.bind_address.clone();

    trace!("Initializing application state");
    let state = initialize_app_state(settings);
    debug!("Application state initialized successfully");

    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("StockCast running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
