use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is unhealthy", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    // Check the artifact root
    let root = &state.resolver.layout().root;
    let artifacts_status = match tokio::fs::metadata(root).await {
        Ok(metadata) if metadata.is_dir() => "available".to_string(),
        _ => "unavailable".to_string(),
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        artifacts: artifacts_status,
    };

    Ok(Json(response))
}
