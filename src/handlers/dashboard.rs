use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::{Availability, DashboardView, Selection};
use compute::{availability_matrix, render_dashboard};
use tracing::{debug, error, info, instrument};

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Render the dashboard for a ticker and model
///
/// Every section is evaluated from scratch. Missing or broken artifacts are
/// reported inside the view, so this endpoint answers 200 for any valid
/// selection.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(
        ("ticker" = String, Query, description = "Ticker code, e.g. TCS"),
        ("model" = String, Query, description = "LSTM, GRU or Prophet"),
    ),
    responses(
        (status = 200, description = "Dashboard rendered", body = ApiResponse<DashboardView>),
        (status = 400, description = "Ticker or model outside the offered choices"),
        (status = 500, description = "Render pass aborted", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    Query(selection): Query<Selection>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardView>>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Rendering dashboard for {}", selection);

    // File reads and inference run off the async workers
    let resolver = state.resolver.clone();
    let models = state.models.clone();
    let limits = state.settings.display;
    let rendered = tokio::task::spawn_blocking(move || {
        render_dashboard(&resolver, models.as_ref(), selection, &limits)
    })
    .await;

    match rendered {
        Ok(view) => {
            info!("Rendered dashboard for {}", selection);
            Ok(Json(ApiResponse {
                data: view,
                message: "Dashboard rendered successfully".to_string(),
                success: true,
            }))
        }
        Err(e) => {
            error!("Render pass for {} aborted: {}", selection, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to render dashboard", "RENDER_FAILED")),
            ))
        }
    }
}

/// Artifact availability for every ticker and model
#[utoipa::path(
    get,
    path = "/api/v1/availability",
    tag = "dashboard",
    responses(
        (status = 200, description = "Availability matrix", body = ApiResponse<Vec<Availability>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_availability(State(state): State<AppState>) -> Json<ApiResponse<Vec<Availability>>> {
    let matrix = availability_matrix(&state.resolver);
    debug!("Computed availability for {} selections", matrix.len());

    Json(ApiResponse {
        data: matrix,
        message: "Artifact availability retrieved successfully".to_string(),
        success: true,
    })
}
