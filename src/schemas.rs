use common::{
    ArtifactStatus, Availability, ChartPoint, ComparisonImage, DashboardOptions, DashboardView,
    ForecastModel, ForecastPreview, ModelFamily, PredictionChart, Selection, Ticker,
};
use compute::{ArtifactResolver, ModelLoader};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::Settings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub settings: Arc<Settings>,
    /// Selection to artifact path mapping
    pub resolver: Arc<ArtifactResolver>,
    /// Loader for trained models, cached by path
    pub models: Arc<dyn ModelLoader>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the artifact root directory is reachable
    pub artifacts: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::options::get_options,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::dashboard::get_availability,
        crate::handlers::artifacts::get_comparison_plot,
        crate::handlers::artifacts::download_forecast,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            Ticker,
            ForecastModel,
            ModelFamily,
            Selection,
            DashboardOptions,
            DashboardView,
            ComparisonImage,
            ForecastPreview,
            PredictionChart,
            ChartPoint,
            Availability,
            ArtifactStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Selection options and rendered dashboard views"),
        (name = "artifacts", description = "Raw artifact delivery"),
    ),
    info(
        title = "StockCast API",
        description = "Stock forecast dashboard - comparison plots, Prophet forecast tables and neural model predictions",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
