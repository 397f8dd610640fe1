use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The artifact file does not exist
    #[error("Artifact not found: {}", .0.display())]
    MissingArtifact(PathBuf),

    /// The selection is configured as permanently unavailable
    #[error("{0}")]
    Unavailable(String),

    /// Error while reading or validating a forecast table
    #[error("Table error: {0}")]
    Table(String),

    /// Error while reading serialized test arrays
    #[error("Array error: {0}")]
    Arrays(String),

    /// Error from loading or running a trained model
    #[error("Inference error: {0}")]
    Inference(String),

    /// Paired series or tensors that do not line up
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Error from file system operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ComputeError {
    /// Whether the failure is an absent artifact rather than a broken one.
    pub fn is_missing(&self) -> bool {
        matches!(self, ComputeError::MissingArtifact(_))
    }

    /// Maps a `NotFound` IO error to [`ComputeError::MissingArtifact`].
    pub fn from_io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            ComputeError::MissingArtifact(path.into())
        } else {
            ComputeError::Io(error)
        }
    }
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::NoData(_) => ComputeError::Table(format!("No data: {}", error)),
            polars::error::PolarsError::ShapeMismatch(_) => {
                ComputeError::Table(format!("Shape mismatch: {}", error))
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                ComputeError::Table(format!("Schema mismatch: {}", error))
            }
            polars::error::PolarsError::ColumnNotFound(_) => {
                ComputeError::Table(format!("Column not found: {}", error))
            }
            _ => ComputeError::Table(error.to_string()),
        };
        error!(?compute_error, "DataFrame error");
        compute_error
    }
}

impl From<ndarray_npy::ReadNpzError> for ComputeError {
    fn from(error: ndarray_npy::ReadNpzError) -> Self {
        ComputeError::Arrays(error.to_string())
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
