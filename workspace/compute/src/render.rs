//! One render pass: turns a selection into a fully evaluated dashboard view.
//!
//! Every section catches its own failures and reports them as a warning
//! (artifact absent) or an error (artifact broken or combination excluded).

use common::{
    ArtifactStatus, Availability, ComparisonImage, DashboardView, DetailSection, ForecastModel,
    ForecastPreview, PredictionChart, SectionView, Selection, Ticker, READY_BANNER,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::arrays::PairedArrays;
use crate::chart::paired_window;
use crate::error::{ComputeError, Result};
use crate::forecast_table::ForecastTable;
use crate::predictor::ModelLoader;
use crate::resolver::{forecast_file_name, ArtifactResolver, DetailArtifacts};

pub const PLOT_NOT_FOUND: &str = "Plot not found for this stock.";
pub const FORECAST_NOT_FOUND: &str = "Forecast table not found for this stock.";

/// How much of each artifact is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLimits {
    /// Rows shown from the end of the forecast table
    pub table_preview_rows: usize,
    /// Paired points shown from the end of the prediction series
    pub chart_window: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            table_preview_rows: 20,
            chart_window: 100,
        }
    }
}

/// Evaluates every section for `selection`.
///
/// Nothing is carried over between calls; each view is built from the
/// artifacts as they are on disk right now.
#[instrument(skip(resolver, loader))]
pub fn render_dashboard(
    resolver: &ArtifactResolver,
    loader: &dyn ModelLoader,
    selection: Selection,
    limits: &DisplayLimits,
) -> DashboardView {
    let resolved = resolver.resolve(selection);

    let comparison = comparison_section(selection.ticker, &resolved.comparison_image);

    let detail = match resolved.detail {
        DetailArtifacts::Unavailable { reason } => {
            info!("Selection {} is excluded: {}", selection, reason);
            match selection.model {
                ForecastModel::Prophet => DetailSection::Forecast(SectionView::error(reason)),
                ForecastModel::Lstm | ForecastModel::Gru => DetailSection::Prediction(SectionView::error(reason)),
            }
        }
        DetailArtifacts::Forecast { table } => {
            DetailSection::Forecast(forecast_section(selection, &table, limits.table_preview_rows))
        }
        DetailArtifacts::Prediction { model, arrays } => DetailSection::Prediction(prediction_section(
            selection,
            loader,
            &model,
            &arrays,
            resolver,
            limits.chart_window,
        )),
    };

    DashboardView {
        selection,
        comparison,
        detail,
        status_banner: READY_BANNER.to_string(),
    }
}

fn comparison_section(ticker: Ticker, path: &Path) -> SectionView<ComparisonImage> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => match std::fs::File::open(path) {
            Ok(_) => SectionView::ready(ComparisonImage {
                ticker,
                size_bytes: metadata.len(),
            }),
            Err(e) => {
                warn!("Comparison plot {} is not readable: {}", path.display(), e);
                SectionView::error(format!("Plot Load Error: {}", e))
            }
        },
        Ok(_) => {
            warn!("Comparison plot path {} is not a file", path.display());
            SectionView::warning(PLOT_NOT_FOUND)
        }
        Err(e) => {
            debug!("Comparison plot {} unavailable: {}", path.display(), e);
            SectionView::warning(PLOT_NOT_FOUND)
        }
    }
}

fn forecast_section(selection: Selection, path: &Path, preview_rows: usize) -> SectionView<ForecastPreview> {
    match load_forecast_preview(selection, path, preview_rows) {
        Ok(preview) => SectionView::ready(preview),
        Err(e) if e.is_missing() => {
            debug!("{}", e);
            SectionView::warning(FORECAST_NOT_FOUND)
        }
        Err(e) => {
            warn!("Forecast table {} failed to load: {}", path.display(), e);
            SectionView::error(format!("Prophet CSV Load Error: {}", e))
        }
    }
}

fn load_forecast_preview(selection: Selection, path: &Path, preview_rows: usize) -> Result<ForecastPreview> {
    let table = ForecastTable::load(path)?;
    Ok(ForecastPreview {
        columns: table.columns(),
        rows: table.tail_rows(preview_rows)?,
        total_rows: table.height(),
        date_column: table.date_column().to_string(),
        value_column: table.value_column().to_string(),
        file_name: forecast_file_name(selection.model, selection.ticker),
    })
}

fn prediction_section(
    selection: Selection,
    loader: &dyn ModelLoader,
    model_path: &Path,
    arrays_path: &Path,
    resolver: &ArtifactResolver,
    window: usize,
) -> SectionView<PredictionChart> {
    match predict_window(selection, loader, model_path, arrays_path, resolver, window) {
        Ok(chart) => SectionView::ready(chart),
        Err(ComputeError::MissingArtifact(path)) => {
            debug!("Prediction artifact missing: {}", path.display());
            let file = path.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default();
            SectionView::warning(format!(
                "{} prediction artifacts not found for this stock ({}).",
                selection.model, file
            ))
        }
        Err(e) => {
            warn!("Prediction for {} failed: {}", selection, e);
            SectionView::error(format!("Prediction Error: {}", e))
        }
    }
}

fn predict_window(
    selection: Selection,
    loader: &dyn ModelLoader,
    model_path: &Path,
    arrays_path: &Path,
    resolver: &ArtifactResolver,
    window: usize,
) -> Result<PredictionChart> {
    let layout = resolver.layout();
    let predictor = loader.load(model_path)?;
    let arrays = PairedArrays::load(arrays_path, &layout.inputs_key, &layout.targets_key)?;

    debug!("Predicting {} samples for {}", arrays.samples(), selection);
    let predicted = predictor.predict(arrays.inputs(), arrays.input_shape())?;
    let points = paired_window(arrays.targets(), &predicted, window)?;
    debug!("Prediction window of {} points for {}", points.len(), selection);

    Ok(PredictionChart {
        model: selection.model,
        points,
        total_points: arrays.targets().len(),
    })
}

/// Reports which artifacts exist for `selection` without loading them.
pub fn availability(resolver: &ArtifactResolver, selection: Selection) -> Availability {
    let resolved = resolver.resolve(selection);

    let detail = match &resolved.detail {
        DetailArtifacts::Unavailable { .. } => ArtifactStatus::Excluded,
        DetailArtifacts::Forecast { table } => file_status(table),
        DetailArtifacts::Prediction { model, arrays } => {
            if model.is_file() && arrays.is_file() {
                ArtifactStatus::Present
            } else {
                ArtifactStatus::Missing
            }
        }
    };

    Availability {
        selection,
        comparison_image: file_status(&resolved.comparison_image),
        detail,
    }
}

/// Availability of every selection, ticker-major.
pub fn availability_matrix(resolver: &ArtifactResolver) -> Vec<Availability> {
    Selection::all().map(|selection| availability(resolver, selection)).collect()
}

fn file_status(path: &Path) -> ArtifactStatus {
    if path.is_file() {
        ArtifactStatus::Present
    } else {
        ArtifactStatus::Missing
    }
}
