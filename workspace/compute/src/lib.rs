pub mod arrays;
pub mod chart;
pub mod error;
pub mod forecast_table;
pub mod predictor;
pub mod render;
pub mod resolver;

pub use predictor::{ModelLoader, OnnxModelLoader, Predictor};
pub use render::{availability, availability_matrix, render_dashboard, DisplayLimits};
pub use resolver::{ArtifactLayout, ArtifactResolver, Exclusion, ExclusionSet};
