//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::entities::DeducedFields;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache lock poisoned")]
    Poisoned,

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// A remembered engine result. `None` is a remembered empty record, so an
/// unparseable input is not re-parsed on every request either.
pub type Memoized = Option<DeducedFields>;

/// Trait for memoizing deduction results by raw input string.
///
/// Deduction is deterministic, so entries never go stale and need no TTL.
/// Callers treat every error as a miss.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - LRU-bounded in-process map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the memoized result for `raw_url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(result))` on cache hit (the result itself may be the empty record)
    /// - `Ok(None)` on cache miss
    async fn get(&self, raw_url: &str) -> CacheResult<Option<Memoized>>;

    /// Remembers the result computed for `raw_url`.
    async fn put(&self, raw_url: &str, result: Memoized) -> CacheResult<()>;

    /// Number of entries currently held.
    async fn len(&self) -> usize;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Checks if the cache backend is usable.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
