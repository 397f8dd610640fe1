use anyhow::{Context, Result};
use compute::{ArtifactLayout, ArtifactResolver, DisplayLimits, Exclusion, ExclusionSet, OnnxModelLoader};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::model_cache::CachedModelLoader;
use crate::schemas::AppState;

/// Prefix of environment variables read into [`Settings`], e.g.
/// `STOCKCAST__DISPLAY__CHART_WINDOW=50`.
pub const ENV_PREFIX: &str = "STOCKCAST";

/// Default configuration file, looked up with any supported extension.
pub const DEFAULT_CONFIG_FILE: &str = "stockcast";

/// Runtime configuration of the dashboard server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bind address for the web server (IP:PORT)
    pub bind_address: String,
    /// Where the externally produced artifacts live
    pub artifacts: ArtifactLayout,
    /// Table preview length and chart window
    pub display: DisplayLimits,
    /// Combinations that are always reported as unavailable
    pub exclusions: Vec<Exclusion>,
    /// Cache of loaded models
    pub cache: CacheSettings,
    /// Built frontend served at the root path
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            artifacts: ArtifactLayout::default(),
            display: DisplayLimits::default(),
            exclusions: ExclusionSet::default_rules().entries().to_vec(),
            cache: CacheSettings::default(),
            static_dir: PathBuf::from("workspace/frontend/dist"),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of loaded models kept in memory
    pub max_capacity: u64,
    /// Seconds a loaded model is reused before it is read from disk again
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: 16,
            ttl_secs: 300,
        }
    }
}

impl Settings {
    /// Loads settings from `.env`, an optional config file and the environment.
    ///
    /// Later sources override earlier ones: built-in defaults, then the config
    /// file (`config_path`, or `stockcast.*` in the working directory), then
    /// `STOCKCAST__*` variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = match config_path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;

        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn resolver(&self) -> ArtifactResolver {
        ArtifactResolver::new(self.artifacts.clone(), ExclusionSet::new(self.exclusions.clone()))
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: Settings) -> AppState {
    tracing::info!("Serving artifacts from: {}", settings.artifacts.root.display());

    let models = CachedModelLoader::new(
        OnnxModelLoader,
        settings.cache.max_capacity,
        Duration::from_secs(settings.cache.ttl_secs),
    );

    AppState {
        resolver: Arc::new(settings.resolver()),
        models: Arc::new(models),
        settings: Arc::new(settings),
    }
}
