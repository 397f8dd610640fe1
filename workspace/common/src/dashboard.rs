use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::selection::{ForecastModel, Selection, Ticker};

/// Informational footer shown under the selection controls.
pub const FOOTER_TEXT: &str = "Built with ❤️ by Adithya";

/// Banner shown once every section of a render pass has been evaluated.
pub const READY_BANNER: &str = "App Ready and Running!";

/// Outcome of one display section.
///
/// A missing artifact is a warning, a load failure or a known-unavailable
/// combination is an error. Neither aborts the rest of the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionView<T> {
    Ready { content: T },
    Warning { message: String },
    Error { message: String },
}

impl<T> SectionView<T> {
    pub fn ready(content: T) -> Self {
        SectionView::Ready { content }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        SectionView::Warning { message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        SectionView::Error { message: message.into() }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SectionView::Ready { .. })
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            SectionView::Ready { content } => Some(content),
            _ => None,
        }
    }

    /// Warning or error text, if the section is not ready.
    pub fn message(&self) -> Option<&str> {
        match self {
            SectionView::Ready { .. } => None,
            SectionView::Warning { message } | SectionView::Error { message } => Some(message),
        }
    }
}

/// Pre-rendered comparison plot for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonImage {
    pub ticker: Ticker,
    /// Size of the image file in bytes
    pub size_bytes: u64,
}

/// Tail of a forecast table plus what the download affordance needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPreview {
    pub columns: Vec<String>,
    /// Last rows of the table, cell text exactly as stored in the artifact
    pub rows: Vec<Vec<String>>,
    /// Row count of the whole table
    pub total_rows: usize,
    /// Column holding the forecast date
    pub date_column: String,
    /// Column holding the forecast value
    pub value_column: String,
    /// Suggested file name for the downloaded CSV
    pub file_name: String,
}

/// One paired point of the actual-vs-predicted chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    /// Position in the full test series
    pub index: usize,
    pub actual: f64,
    pub predicted: f64,
}

/// Actual-vs-predicted window for a neural model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionChart {
    pub model: ForecastModel,
    pub points: Vec<ChartPoint>,
    /// Length of the full test series the window was taken from
    pub total_points: usize,
}

/// The model-dependent section of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum DetailSection {
    Forecast(SectionView<ForecastPreview>),
    Prediction(SectionView<PredictionChart>),
}

impl DetailSection {
    pub fn message(&self) -> Option<&str> {
        match self {
            DetailSection::Forecast(section) => section.message(),
            DetailSection::Prediction(section) => section.message(),
        }
    }
}

/// Everything a single render pass produces for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardView {
    pub selection: Selection,
    #[schema(value_type = Object)]
    pub comparison: SectionView<ComparisonImage>,
    #[schema(value_type = Object)]
    pub detail: DetailSection,
    pub status_banner: String,
}

/// Choices offered by the selection controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardOptions {
    pub tickers: Vec<Ticker>,
    pub models: Vec<ForecastModel>,
    pub default_selection: Selection,
    pub footer: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            tickers: Ticker::ALL.to_vec(),
            models: ForecastModel::ALL.to_vec(),
            default_selection: Selection::default(),
            footer: FOOTER_TEXT.to_string(),
        }
    }
}

/// Whether the artifacts behind a section exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    Present,
    Missing,
    Excluded,
}

/// Artifact availability for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    pub selection: Selection,
    pub comparison_image: ArtifactStatus,
    pub detail: ArtifactStatus,
}
