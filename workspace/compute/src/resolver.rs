//! Pure mapping from a [`Selection`] to the artifact files it refers to.
//!
//! Nothing in this module touches the file system; existence checks and
//! loading belong to the render pass.

use common::{ForecastModel, ModelFamily, Selection, Ticker};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory layout of the externally produced artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactLayout {
    /// Base directory every other directory is relative to
    pub root: PathBuf,
    /// Pre-rendered comparison images
    pub plots_dir: PathBuf,
    /// Prophet forecast tables
    pub forecasts_dir: PathBuf,
    /// Trained neural models exported to ONNX
    pub models_dir: PathBuf,
    /// NPZ archives with test inputs and targets
    pub arrays_dir: PathBuf,
    /// Name of the model input array inside the NPZ archive
    pub inputs_key: String,
    /// Name of the true target array inside the NPZ archive
    pub targets_key: String,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            plots_dir: PathBuf::from("plots"),
            forecasts_dir: PathBuf::from("forecasts"),
            models_dir: PathBuf::from("models"),
            arrays_dir: PathBuf::from("data"),
            inputs_key: "X_test".to_string(),
            targets_key: "y_test".to_string(),
        }
    }
}

impl ArtifactLayout {
    /// Layout with default directory names under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn comparison_image(&self, ticker: Ticker) -> PathBuf {
        self.root
            .join(&self.plots_dir)
            .join(format!("{}_comparison.png", ticker.code()))
    }

    pub fn forecast_table(&self, ticker: Ticker) -> PathBuf {
        self.root
            .join(&self.forecasts_dir)
            .join(forecast_file_name(ForecastModel::Prophet, ticker))
    }

    pub fn model(&self, ticker: Ticker, model: ForecastModel) -> PathBuf {
        self.root
            .join(&self.models_dir)
            .join(format!("{}_{}.onnx", ticker.code(), model.slug()))
    }

    pub fn arrays(&self, ticker: Ticker) -> PathBuf {
        self.root
            .join(&self.arrays_dir)
            .join(format!("{}_test.npz", ticker.code()))
    }
}

/// `<approach>_<ticker>_forecast.csv`, shared by the artifact and the download.
pub fn forecast_file_name(model: ForecastModel, ticker: Ticker) -> String {
    format!("{}_{}_forecast.csv", model.slug(), ticker.code())
}

/// A (ticker, model) pair that is always reported as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub ticker: Ticker,
    pub model: ForecastModel,
    /// Message shown in place of the section
    pub reason: String,
}

impl Exclusion {
    pub fn new(ticker: Ticker, model: ForecastModel, reason: impl Into<String>) -> Self {
        Self {
            ticker,
            model,
            reason: reason.into(),
        }
    }

    pub fn matches(&self, selection: &Selection) -> bool {
        self.ticker == selection.ticker && self.model == selection.model
    }
}

/// Configured set of unavailable combinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    entries: Vec<Exclusion>,
}

impl ExclusionSet {
    pub fn new(entries: Vec<Exclusion>) -> Self {
        Self { entries }
    }

    /// The combinations known to have broken artifacts.
    pub fn default_rules() -> Self {
        Self::new(vec![Exclusion::new(
            Ticker::Aapl,
            ForecastModel::Prophet,
            "Prophet model not available for AAPL due to file errors.",
        )])
    }

    pub fn find(&self, selection: &Selection) -> Option<&Exclusion> {
        self.entries.iter().find(|entry| entry.matches(selection))
    }

    pub fn entries(&self) -> &[Exclusion] {
        &self.entries
    }
}

/// Artifacts behind the model-dependent section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailArtifacts {
    /// Statistical approach: a forecast table
    Forecast { table: PathBuf },
    /// Neural approach: a trained model and its paired test arrays
    Prediction { model: PathBuf, arrays: PathBuf },
    /// Excluded combination, no artifact is consulted
    Unavailable { reason: String },
}

/// All artifact references for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifacts {
    pub selection: Selection,
    pub comparison_image: PathBuf,
    pub detail: DetailArtifacts,
}

/// Computes artifact paths from a selection.
#[derive(Debug, Clone, Default)]
pub struct ArtifactResolver {
    layout: ArtifactLayout,
    exclusions: ExclusionSet,
}

impl ArtifactResolver {
    pub fn new(layout: ArtifactLayout, exclusions: ExclusionSet) -> Self {
        Self { layout, exclusions }
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn resolve(&self, selection: Selection) -> ResolvedArtifacts {
        let Selection { ticker, model } = selection;

        let detail = if let Some(exclusion) = self.exclusions.find(&selection) {
            DetailArtifacts::Unavailable {
                reason: exclusion.reason.clone(),
            }
        } else {
            match model.family() {
                ModelFamily::Statistical => DetailArtifacts::Forecast {
                    table: self.layout.forecast_table(ticker),
                },
                ModelFamily::Neural => DetailArtifacts::Prediction {
                    model: self.layout.model(ticker, model),
                    arrays: self.layout.arrays(ticker),
                },
            }
        };

        ResolvedArtifacts {
            selection,
            comparison_image: self.layout.comparison_image(ticker),
            detail,
        }
    }
}
