use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use common::{ForecastModel, Selection, Ticker};
use compute::error::ComputeError;
use compute::forecast_table::ForecastTable;
use compute::render::{FORECAST_NOT_FOUND, PLOT_NOT_FOUND};
use compute::resolver::{forecast_file_name, DetailArtifacts};
use tracing::{debug, error, info, instrument, warn};

use crate::schemas::{AppState, ErrorResponse};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Comparison plot image for a ticker
#[utoipa::path(
    get,
    path = "/api/v1/plots/{ticker}",
    tag = "artifacts",
    params(
        ("ticker" = String, Path, description = "Ticker code, e.g. TCS"),
    ),
    responses(
        (status = 200, description = "PNG image"),
        (status = 404, description = "Plot not found", body = ErrorResponse),
        (status = 500, description = "Plot could not be read", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_comparison_plot(
    Path(ticker): Path<Ticker>,
    State(state): State<AppState>,
) -> Result<Response, ErrorReply> {
    let path = state.resolver.layout().comparison_image(ticker);
    debug!("Reading comparison plot {}", path.display());

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            info!("Serving comparison plot for {} ({} bytes)", ticker, bytes.len());
            Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Comparison plot for {} not found", ticker);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(PLOT_NOT_FOUND, "PLOT_NOT_FOUND")),
            ))
        }
        Err(e) => {
            error!("Failed to read comparison plot {}: {}", path.display(), e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to read comparison plot", "PLOT_READ_FAILED")),
            ))
        }
    }
}

/// Download the full Prophet forecast table as CSV
///
/// The file is served exactly as stored, after checking it parses.
#[utoipa::path(
    get,
    path = "/api/v1/forecasts/{ticker}/download",
    tag = "artifacts",
    params(
        ("ticker" = String, Path, description = "Ticker code, e.g. TCS"),
    ),
    responses(
        (status = 200, description = "Forecast table as CSV"),
        (status = 404, description = "Forecast table not found", body = ErrorResponse),
        (status = 409, description = "Forecast is configured as unavailable", body = ErrorResponse),
        (status = 422, description = "Forecast table is malformed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn download_forecast(
    Path(ticker): Path<Ticker>,
    State(state): State<AppState>,
) -> Result<Response, ErrorReply> {
    let selection = Selection::new(ticker, ForecastModel::Prophet);

    let table_path = match state.resolver.resolve(selection).detail {
        DetailArtifacts::Forecast { table } => table,
        DetailArtifacts::Unavailable { reason } => {
            warn!("Download refused for {}: {}", selection, reason);
            return Err((
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(reason, "FORECAST_UNAVAILABLE")),
            ));
        }
        DetailArtifacts::Prediction { .. } => {
            error!("Prophet selection {} resolved to prediction artifacts", selection);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Unexpected artifact layout", "INTERNAL_ERROR")),
            ));
        }
    };

    let exported = tokio::task::spawn_blocking(move || ForecastTable::export(&table_path))
        .await
        .map_err(|e| {
            error!("Forecast export task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to export forecast", "EXPORT_FAILED")),
            )
        })?;

    match exported {
        Ok(csv) => {
            let file_name = forecast_file_name(selection.model, ticker);
            info!("Serving {} ({} bytes)", file_name, csv.len());
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                csv,
            )
                .into_response())
        }
        Err(e @ ComputeError::MissingArtifact(_)) => {
            warn!("{}", e);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(FORECAST_NOT_FOUND, "FORECAST_NOT_FOUND")),
            ))
        }
        Err(e) => {
            warn!("Forecast table for {} is malformed: {}", ticker, e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(
                    format!("Prophet CSV Load Error: {}", e),
                    "FORECAST_MALFORMED",
                )),
            ))
        }
    }
}
