//! Infrastructure layer for integrations around the pure engine.
//!
//! # Modules
//!
//! - [`cache`] - Memoization backends (in-process LRU and no-op)

pub mod cache;
