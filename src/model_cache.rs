use compute::error::Result;
use compute::{ModelLoader, Predictor};
use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// A caching wrapper for [`ModelLoader`] implementations.
///
/// Loaded models are keyed by their artifact path, so two selections only
/// share an entry when they resolve to the same file. Failed loads are not
/// cached: a model that appears on disk is picked up on the next request.
pub struct CachedModelLoader<L: ModelLoader> {
    inner: L,
    cache: Cache<PathBuf, Arc<dyn Predictor>>,
}

impl<L: ModelLoader> CachedModelLoader<L> {
    pub fn new(inner: L, max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }
}

impl<L: ModelLoader> ModelLoader for CachedModelLoader<L> {
    fn load(&self, path: &Path) -> Result<Arc<dyn Predictor>> {
        if let Some(predictor) = self.cache.get(path) {
            trace!("Model cache hit for {}", path.display());
            return Ok(predictor);
        }

        debug!("Model cache miss for {}", path.display());
        let predictor = self.inner.load(path)?;
        self.cache.insert(path.to_path_buf(), predictor.clone());
        Ok(predictor)
    }
}
