//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService, Memoized};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when `CACHE_CAPACITY` is 0. Every lookup is a miss and every store
/// is dropped, so each request runs the engine.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (memoization disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _raw_url: &str) -> CacheResult<Option<Memoized>> {
        Ok(None)
    }

    async fn put(&self, _raw_url: &str, _result: Memoized) -> CacheResult<()> {
        Ok(())
    }

    async fn len(&self) -> usize {
        0
    }

    fn backend(&self) -> &'static str {
        "null"
    }

    async fn health_check(&self) -> bool {
        true
    }
}
