use common::ChartPoint;

use crate::error::{ComputeError, Result};

/// Pairs the last `window` actual and predicted values by position.
///
/// Both series must have the same length; taking the tail of each separately
/// would misalign them.
pub fn paired_window(actual: &[f32], predicted: &[f32], window: usize) -> Result<Vec<ChartPoint>> {
    if actual.len() != predicted.len() {
        return Err(ComputeError::ShapeMismatch(format!(
            "{} actual values but {} predictions",
            actual.len(),
            predicted.len()
        )));
    }

    let start = actual.len().saturating_sub(window);
    Ok(actual[start..]
        .iter()
        .zip(&predicted[start..])
        .enumerate()
        .map(|(offset, (actual, predicted))| ChartPoint {
            index: start + offset,
            actual: f64::from(*actual),
            predicted: f64::from(*predicted),
        })
        .collect())
}
