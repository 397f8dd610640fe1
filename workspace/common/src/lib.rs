//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod dashboard;
mod selection;

pub use dashboard::{
    ArtifactStatus, Availability, ChartPoint, ComparisonImage, DashboardOptions, DashboardView,
    DetailSection, ForecastPreview, PredictionChart, SectionView, FOOTER_TEXT, READY_BANNER,
};
pub use selection::{ForecastModel, ModelFamily, ParseSelectionError, Selection, Ticker};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in src/schemas.rs with the
/// same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
