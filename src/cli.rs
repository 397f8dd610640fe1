use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{check, serve};

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Stock forecast dashboard server and artifact tools")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    ///
    /// Defaults to `stockcast.*` in the working directory when present.
    /// Values can also be set with STOCKCAST__<SECTION>__<KEY> variables,
    /// e.g. STOCKCAST__DISPLAY__CHART_WINDOW=50.
    #[arg(short, long, env = "STOCKCAST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the plots, forecasts, models and data folders
    #[arg(short, long, global = true)]
    pub artifact_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Report which artifacts exist for every ticker and model
    Check,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = crate::config::Settings::load(self.config.as_deref())?;
        if let Some(root) = self.artifact_root {
            settings.artifacts.root = root;
        }

        match self.command {
            Commands::Serve { bind_address } => {
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                serve(settings).await?;
            }
            Commands::Check => {
                check(&settings)?;
            }
        }
        Ok(())
    }
}
