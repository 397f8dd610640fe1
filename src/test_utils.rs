#[cfg(test)]
pub mod test_utils {
    use crate::config::Settings;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::{ForecastModel, Ticker};
    use compute::error::{ComputeError, Result};
    use compute::{ModelLoader, Predictor};
    use ndarray::{Array2, Array3};
    use ndarray_npy::NpzWriter;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Predicts the last value of each input window.
    pub struct LastValuePredictor;

    impl Predictor for LastValuePredictor {
        fn predict(&self, inputs: &[f32], shape: &[usize]) -> Result<Vec<f32>> {
            let per_sample = inputs.len() / shape[0];
            Ok(inputs.chunks(per_sample).map(|chunk| chunk[per_sample - 1]).collect())
        }
    }

    /// Stands in for the ONNX loader: any existing model file yields
    /// [`LastValuePredictor`].
    pub struct StubModelLoader;

    impl ModelLoader for StubModelLoader {
        fn load(&self, path: &Path) -> Result<Arc<dyn Predictor>> {
            if !path.is_file() {
                return Err(ComputeError::MissingArtifact(path.to_path_buf()));
            }
            Ok(Arc::new(LastValuePredictor))
        }
    }

    /// Temporary artifact directory with the default layout.
    pub struct TestArtifacts {
        dir: TempDir,
    }

    impl TestArtifacts {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().expect("Failed to create artifact directory");
            for sub in ["plots", "forecasts", "models", "data"] {
                fs::create_dir_all(dir.path().join(sub)).expect("Failed to create artifact subdirectory");
            }
            Self { dir }
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }

        pub fn write(&self, relative: &str, contents: &[u8]) {
            fs::write(self.dir.path().join(relative), contents).expect("Failed to write artifact");
        }

        pub fn write_plot(&self, ticker: Ticker, bytes: &[u8]) {
            self.write(&format!("plots/{}_comparison.png", ticker.code()), bytes);
        }

        pub fn write_forecast(&self, ticker: Ticker, csv: &str) {
            self.write(&format!("forecasts/prophet_{}_forecast.csv", ticker.code()), csv.as_bytes());
        }

        /// Forecast table with `rows` daily rows and Prophet's interval columns.
        pub fn write_prophet_forecast(&self, ticker: Ticker, rows: usize) -> String {
            let mut csv = String::from("ds,yhat,yhat_lower,yhat_upper\n");
            for i in 0..rows {
                csv.push_str(&format!(
                    "2025-{:02}-{:02},{}.5,{}.25,{}.75\n",
                    (i / 28) + 1,
                    (i % 28) + 1,
                    200 + i,
                    190 + i,
                    210 + i
                ));
            }
            self.write_forecast(ticker, &csv);
            csv
        }

        /// Model file content is never parsed by [`StubModelLoader`].
        pub fn write_model(&self, ticker: Ticker, model: ForecastModel) {
            self.write(&format!("models/{}_{}.onnx", ticker.code(), model.slug()), b"stub");
        }

        /// `samples` windows of length 3 whose last value equals the target.
        pub fn write_arrays(&self, ticker: Ticker, samples: usize) {
            let inputs = Array3::from_shape_fn((samples, 3, 1), |(i, j, _)| (i + j) as f32);
            let targets = Array2::from_shape_fn((samples, 1), |(i, _)| (i + 2) as f32);
            let file = fs::File::create(self.dir.path().join(format!("data/{}_test.npz", ticker.code())))
                .expect("Failed to create arrays file");
            let mut npz = NpzWriter::new(file);
            npz.add_array("X_test", &inputs).expect("Failed to write inputs");
            npz.add_array("y_test", &targets).expect("Failed to write targets");
            npz.finish().expect("Failed to finish arrays file");
        }
    }

    /// Settings pointing at `artifacts`, with no frontend bundle.
    pub fn test_settings(artifacts: &TestArtifacts) -> Settings {
        let mut settings = Settings::default();
        settings.artifacts.root = artifacts.root().to_path_buf();
        settings.static_dir = artifacts.root().join("dist");
        settings
    }

    /// Create AppState for testing
    pub fn setup_test_app_state(settings: Settings) -> AppState {
        AppState {
            resolver: Arc::new(settings.resolver()),
            models: Arc::new(StubModelLoader),
            settings: Arc::new(settings),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG and defaults to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app(artifacts: &TestArtifacts) -> Router {
        let _guard = init_test_tracing();
        create_router(setup_test_app_state(test_settings(artifacts)))
    }
}
