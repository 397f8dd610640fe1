//! In-process inference for the trained neural models.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tract_onnx::prelude::*;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};

/// A trained model that maps a batch of inputs to predictions.
pub trait Predictor: Send + Sync {
    /// Runs the model on `inputs` laid out row-major with `shape`, returning
    /// the flattened predictions.
    fn predict(&self, inputs: &[f32], shape: &[usize]) -> Result<Vec<f32>>;
}

/// Obtains a [`Predictor`] for a model artifact.
pub trait ModelLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Arc<dyn Predictor>>;
}

/// A network exported to ONNX, optimized and ready to run.
pub struct OnnxPredictor {
    path: PathBuf,
    plan: TypedRunnableModel<TypedModel>,
}

impl OnnxPredictor {
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ComputeError::MissingArtifact(path.to_path_buf()));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ComputeError::Inference(format!("failed to load {}: {}", path.display(), e)))?;

        info!("Loaded model {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            plan,
        })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, inputs: &[f32], shape: &[usize]) -> Result<Vec<f32>> {
        let tensor = Tensor::from_shape(shape, inputs)
            .map_err(|e| ComputeError::ShapeMismatch(format!("cannot build input tensor {:?}: {}", shape, e)))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ComputeError::Inference(format!("{}: {}", self.path.display(), e)))?;

        let output = outputs
            .first()
            .ok_or_else(|| ComputeError::Inference("model produced no output".to_string()))?;
        let output = output
            .cast_to::<f32>()
            .map_err(|e| ComputeError::Inference(format!("unexpected output type: {}", e)))?;
        let values = output
            .as_slice::<f32>()
            .map_err(|e| ComputeError::Inference(e.to_string()))?
            .to_vec();

        debug!(output_shape = ?output.shape(), "Inference finished");
        Ok(values)
    }
}

/// Loads ONNX models straight from disk on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnnxModelLoader;

impl ModelLoader for OnnxModelLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn Predictor>> {
        Ok(Arc::new(OnnxPredictor::load(path)?))
    }
}
