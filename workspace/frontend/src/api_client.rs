use common::{ApiResponse, DashboardOptions, DashboardView, Selection, Ticker};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Error Response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error {}: {}", endpoint, err.code, err.error);
                err.error
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Choices for the selection controls
pub async fn get_options() -> Result<DashboardOptions, String> {
    get("/options").await
}

/// Renders the dashboard for one selection
pub async fn get_dashboard(selection: Selection) -> Result<DashboardView, String> {
    get(&format!(
        "/dashboard?ticker={}&model={}",
        selection.ticker.code(),
        selection.model.label()
    ))
    .await
}

/// Image source of the comparison plot
pub fn plot_url(ticker: Ticker) -> String {
    api_url(&format!("/plots/{}", ticker.code()))
}

/// Link target of the forecast CSV download
pub fn download_url(ticker: Ticker) -> String {
    api_url(&format!("/forecasts/{}/download", ticker.code()))
}
