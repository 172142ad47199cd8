//! Memoization layer for deduction results.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process LRU cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::{CacheError, CacheResult, CacheService, Memoized};

#[cfg(test)]
pub use service::MockCacheService;
