//! Process-wide lazily loaded model.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::config::ModelConfig;

use super::accel::{accelerator_available, device_label};
use super::client::HttpModel;
use super::types::BackendError;

type Loader<M> = Box<dyn Fn() -> Result<M, BackendError> + Send + Sync>;

/// Memoized model factory.
///
/// The first successful `get` runs the loader; every later call returns the
/// same instance without locking. A failed load caches nothing.
pub struct ModelCache<M> {
    model: OnceLock<Arc<M>>,
    init: Mutex<()>,
    loader: Loader<M>,
}

impl<M> ModelCache<M> {
    pub fn new(loader: impl Fn() -> Result<M, BackendError> + Send + Sync + 'static) -> Self {
        Self {
            model: OnceLock::new(),
            init: Mutex::new(()),
            loader: Box::new(loader),
        }
    }

    /// Wrap an already loaded model.
    pub fn preloaded(model: M) -> Self
    where
        M: Send + Sync + 'static,
    {
        let cache = Self::new(|| Err(BackendError::LoadFailed("loader not set".to_string())));
        let _ = cache.model.set(Arc::new(model));
        cache
    }

    /// Get the model, loading it on first use.
    pub fn get(&self) -> Result<Arc<M>, BackendError> {
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }

        // Only one caller loads; the rest wait and then see the cached instance.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }

        let model = Arc::new((self.loader)()?);
        let _ = self.model.set(Arc::clone(&model));

        Ok(model)
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

impl ModelCache<HttpModel> {
    /// Cache for the configured model on the local model server.
    pub fn http(config: ModelConfig) -> Self {
        Self::new(move || {
            let gpu = accelerator_available();
            log::info!(
                "Loading model: {} | Device={}",
                config.model_name,
                device_label(gpu)
            );
            HttpModel::load(&config, gpu)
        })
    }
}
