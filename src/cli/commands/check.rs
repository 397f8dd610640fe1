use anyhow::Result;
use common::{ArtifactStatus, Availability};
use compute::{availability_matrix, Exclusion};
use tracing::{info, warn};

use crate::config::Settings;

/// Prints which artifacts exist for every ticker and model.
///
/// Missing artifacts are not a failure: the dashboard renders them as
/// warnings. The command only fails when the configuration cannot be loaded.
pub fn check(settings: &Settings) -> Result<()> {
    let resolver = settings.resolver();
    info!("Checking artifacts under {}", resolver.layout().root.display());

    let matrix = availability_matrix(&resolver);
    println!("{:<8} {:<8} {:<10} {:<10}", "TICKER", "MODEL", "PLOT", "DETAIL");
    for row in &matrix {
        println!("{}", format_row(row));
    }

    for exclusion in resolver.exclusions().entries() {
        println!("{}", format_exclusion(exclusion));
    }

    let incomplete = matrix
        .iter()
        .filter(|row| row.comparison_image == ArtifactStatus::Missing || row.detail == ArtifactStatus::Missing)
        .count();
    if incomplete > 0 {
        warn!("{} of {} selections have missing artifacts", incomplete, matrix.len());
    } else {
        info!("All {} selections have their artifacts", matrix.len());
    }

    Ok(())
}

fn status_label(status: ArtifactStatus) -> &'static str {
    match status {
        ArtifactStatus::Present => "present",
        ArtifactStatus::Missing => "missing",
        ArtifactStatus::Excluded => "excluded",
    }
}

fn format_exclusion(exclusion: &Exclusion) -> String {
    format!(
        "excluded {}/{}: {}",
        exclusion.ticker.code(),
        exclusion.model.label(),
        exclusion.reason
    )
}

fn format_row(row: &Availability) -> String {
    format!(
        "{:<8} {:<8} {:<10} {:<10}",
        row.selection.ticker.code(),
        row.selection.model.label(),
        status_label(row.comparison_image),
        status_label(row.detail),
    )
}
