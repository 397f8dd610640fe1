use crate::handlers::{
    artifacts::{download_forecast, get_comparison_plot},
    dashboard::{get_availability, get_dashboard},
    health::health_check,
    options::get_options,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Unknown paths fall through to the single-page frontend
    let static_dir = &state.settings.static_dir;
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Selection intake and rendered views
        .route("/api/v1/options", get(get_options))
        .route("/api/v1/dashboard", get(get_dashboard))
        .route("/api/v1/availability", get(get_availability))
        // Raw artifacts
        .route("/api/v1/plots/:ticker", get(get_comparison_plot))
        .route("/api/v1/forecasts/:ticker/download", get(download_forecast))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
