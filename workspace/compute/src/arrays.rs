//! Paired model inputs and true targets stored in an NPZ archive.

use ndarray::{ArrayD, IxDyn, OwnedRepr};
use ndarray_npy::NpzReader;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::error::{ComputeError, Result};

/// Test inputs and their true target values, flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedArrays {
    inputs: Vec<f32>,
    input_shape: Vec<usize>,
    targets: Vec<f32>,
}

impl PairedArrays {
    /// Builds a pair after checking the input shape describes the data.
    pub fn new(inputs: Vec<f32>, input_shape: Vec<usize>, targets: Vec<f32>) -> Result<Self> {
        if input_shape.len() < 2 {
            return Err(ComputeError::ShapeMismatch(format!(
                "model inputs must have at least 2 dimensions, got shape {:?}",
                input_shape
            )));
        }
        if input_shape[0] == 0 {
            return Err(ComputeError::ShapeMismatch("model inputs are empty".to_string()));
        }
        let expected: usize = input_shape.iter().product();
        if expected != inputs.len() {
            return Err(ComputeError::ShapeMismatch(format!(
                "input shape {:?} needs {} values, got {}",
                input_shape,
                expected,
                inputs.len()
            )));
        }

        Ok(Self {
            inputs,
            input_shape,
            targets,
        })
    }

    /// Reads `inputs_key` and `targets_key` from the archive at `path`.
    #[instrument]
    pub fn load(path: &Path, inputs_key: &str, targets_key: &str) -> Result<Self> {
        let file = File::open(path).map_err(|e| ComputeError::from_io(e, path))?;
        let mut npz = NpzReader::new(file)?;

        let inputs = read_f32(&mut npz, inputs_key)?;
        let targets = read_f32(&mut npz, targets_key)?;
        debug!(
            input_shape = ?inputs.shape(),
            target_shape = ?targets.shape(),
            "Loaded paired arrays from {}",
            path.display()
        );

        let input_shape = inputs.shape().to_vec();
        Self::new(
            inputs.iter().copied().collect(),
            input_shape,
            targets.iter().copied().collect(),
        )
    }

    pub fn inputs(&self) -> &[f32] {
        &self.inputs
    }

    pub fn input_shape(&self) -> &[usize] {
        &self.input_shape
    }

    /// True target values, flattened.
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Number of samples along the leading input dimension.
    pub fn samples(&self) -> usize {
        self.input_shape[0]
    }
}

/// Reads an array by name, accepting both `f32` and `f64` element types.
fn read_f32<R: Read + Seek>(npz: &mut NpzReader<R>, key: &str) -> Result<ArrayD<f32>> {
    let names = npz.names()?;
    let with_suffix = format!("{}.npy", key);
    let entry = names
        .iter()
        .find(|name| name.as_str() == key || name.as_str() == with_suffix)
        .cloned()
        .ok_or_else(|| {
            ComputeError::Arrays(format!("array '{}' not found in archive (found {:?})", key, names))
        })?;

    match npz.by_name::<OwnedRepr<f32>, IxDyn>(&entry) {
        Ok(array) => Ok(array),
        Err(f32_error) => {
            warn!("Array '{}' is not f32 ({}), retrying as f64", key, f32_error);
            let array = npz
                .by_name::<OwnedRepr<f64>, IxDyn>(&entry)
                .map_err(|_| ComputeError::Arrays(format!("array '{}': {}", key, f32_error)))?;
            Ok(array.mapv(|value| value as f32))
        }
    }
}
