use axum::response::Json;
use common::DashboardOptions;
use tracing::{debug, instrument};

use crate::schemas::ApiResponse;

/// Choices for the ticker and model controls
#[utoipa::path(
    get,
    path = "/api/v1/options",
    tag = "dashboard",
    responses(
        (status = 200, description = "Selection options", body = ApiResponse<DashboardOptions>)
    )
)]
#[instrument]
pub async fn get_options() -> Json<ApiResponse<DashboardOptions>> {
    let options = DashboardOptions::default();
    debug!(
        "Offering {} tickers and {} models",
        options.tickers.len(),
        options.models.len()
    );

    Json(ApiResponse {
        data: options,
        message: "Dashboard options retrieved successfully".to_string(),
        success: true,
    })
}
