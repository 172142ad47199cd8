//! In-process LRU cache.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use lru::LruCache;
use tracing::{debug, info};

use super::service::{CacheError, CacheResult, CacheService, Memoized};

/// Bounded memo of deduction results, evicting the least recently used entry.
///
/// The critical sections are a single map operation, so a plain
/// [`std::sync::Mutex`] is held across no `.await`.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Memoized>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `capacity` results.
    pub fn new(capacity: NonZeroUsize) -> Self {
        info!(capacity = capacity.get(), "Memoization enabled (in-memory LRU)");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, LruCache<String, Memoized>>> {
        self.entries.lock().map_err(|_| CacheError::Poisoned)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, raw_url: &str) -> CacheResult<Option<Memoized>> {
        let hit = self.lock()?.get(raw_url).cloned();
        match &hit {
            Some(_) => debug!(raw_url, "Cache HIT"),
            None => debug!(raw_url, "Cache MISS"),
        }
        Ok(hit)
    }

    async fn put(&self, raw_url: &str, result: Memoized) -> CacheResult<()> {
        self.lock()?.put(raw_url.to_string(), result);
        Ok(())
    }

    async fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> bool {
        self.lock().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deduction::deduce;

    fn cache(capacity: usize) -> MemoryCache {
        MemoryCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[tokio::test]
    async fn test_hit_and_miss() {
        let cache = cache(4);
        let url = "https://jobs.lever.co/acme/abc-123";

        assert!(cache.get(url).await.unwrap().is_none());

        cache.put(url, deduce(url)).await.unwrap();
        let hit = cache.get(url).await.unwrap().unwrap();
        assert_eq!(hit.unwrap().provider, "lever");
    }

    #[tokio::test]
    async fn test_remembers_empty_record() {
        let cache = cache(4);
        cache.put("not a url", None).await.unwrap();
        assert_eq!(cache.get("not a url").await.unwrap(), Some(None));
    }

    #[tokio::test]
    async fn test_evicts_least_recently_used() {
        let cache = cache(2);
        cache.put("a", None).await.unwrap();
        cache.put("b", None).await.unwrap();
        cache.get("a").await.unwrap();
        cache.put("c", None).await.unwrap();

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("b").await.unwrap().is_none());
        assert!(cache.get("a").await.unwrap().is_some());
        assert!(cache.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_health() {
        let cache = cache(1);
        assert!(cache.health_check().await);
        assert_eq!(cache.backend(), "memory");
    }
}
