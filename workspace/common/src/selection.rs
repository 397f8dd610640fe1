use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Stock tickers the dashboard knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Ticker {
    #[serde(rename = "TCS")]
    Tcs,
    #[serde(rename = "INFY")]
    Infy,
    #[serde(rename = "ITC")]
    Itc,
    #[serde(rename = "AAPL")]
    Aapl,
}

impl Ticker {
    /// All tickers in the order they are offered to the user.
    pub const ALL: [Ticker; 4] = [Ticker::Tcs, Ticker::Infy, Ticker::Itc, Ticker::Aapl];

    /// Exchange code, also used as the artifact file name prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Ticker::Tcs => "TCS",
            Ticker::Infy => "INFY",
            Ticker::Itc => "ITC",
            Ticker::Aapl => "AAPL",
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Ticker {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticker::ALL
            .into_iter()
            .find(|ticker| ticker.code() == s)
            .ok_or_else(|| ParseSelectionError::UnknownTicker(s.to_string()))
    }
}

/// How a forecasting approach is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Sequence networks: predictions are computed from a trained model and test arrays.
    Neural,
    /// Decomposition model: a forecast table is produced ahead of time.
    Statistical,
}

/// Forecasting approach selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum ForecastModel {
    #[serde(rename = "LSTM")]
    Lstm,
    #[serde(rename = "GRU")]
    Gru,
    #[serde(rename = "Prophet")]
    Prophet,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 3] = [ForecastModel::Lstm, ForecastModel::Gru, ForecastModel::Prophet];

    pub fn label(&self) -> &'static str {
        match self {
            ForecastModel::Lstm => "LSTM",
            ForecastModel::Gru => "GRU",
            ForecastModel::Prophet => "Prophet",
        }
    }

    /// Lowercase name used in artifact file names.
    pub fn slug(&self) -> &'static str {
        match self {
            ForecastModel::Lstm => "lstm",
            ForecastModel::Gru => "gru",
            ForecastModel::Prophet => "prophet",
        }
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            ForecastModel::Lstm | ForecastModel::Gru => ModelFamily::Neural,
            ForecastModel::Prophet => ModelFamily::Statistical,
        }
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ForecastModel {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastModel::ALL
            .into_iter()
            .find(|model| model.label() == s)
            .ok_or_else(|| ParseSelectionError::UnknownModel(s.to_string()))
    }
}

/// Error returned when a selection value is outside its enumerated domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("unknown ticker '{0}'")]
    UnknownTicker(String),
    #[error("unknown model '{0}'")]
    UnknownModel(String),
}

/// The user's current choice of ticker and model.
///
/// Immutable for the duration of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Selection {
    pub ticker: Ticker,
    pub model: ForecastModel,
}

impl Selection {
    pub fn new(ticker: Ticker, model: ForecastModel) -> Self {
        Self { ticker, model }
    }

    /// Every possible selection, ticker-major.
    pub fn all() -> impl Iterator<Item = Selection> {
        Ticker::ALL
            .into_iter()
            .flat_map(|ticker| ForecastModel::ALL.into_iter().map(move |model| Selection::new(ticker, model)))
    }
}

impl Default for Selection {
    /// First ticker and first model, matching the initial state of the controls.
    fn default() -> Self {
        Self::new(Ticker::ALL[0], ForecastModel::ALL[0])
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ticker, self.model)
    }
}
