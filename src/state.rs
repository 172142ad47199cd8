//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DeductionService;
use crate::config::DEFAULT_MAX_BATCH_SIZE;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub deduction_service: Arc<DeductionService>,
    /// Upper bound on URLs per batch request.
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(cache: Arc<dyn CacheService>, max_batch_size: usize) -> Self {
        Self {
            deduction_service: Arc::new(DeductionService::new(cache)),
            max_batch_size,
        }
    }

    /// State with the default batch limit.
    pub fn with_cache(cache: Arc<dyn CacheService>) -> Self {
        Self::new(cache, DEFAULT_MAX_BATCH_SIZE)
    }
}
