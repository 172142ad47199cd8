#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use std::num::NonZeroUsize;
use std::sync::Arc;

use jobhint::api;
use jobhint::api::handlers::health_handler;
use jobhint::infrastructure::cache::{MemoryCache, NullCache};
use jobhint::state::AppState;

pub const GREENHOUSE_URL: &str = "https://boards.greenhouse.io/boards/acme/jobs/123456";
pub const WORKDAY_URL: &str = "https://azenta.wd1.myworkdayjobs.com/en-US/Azenta/job/_R20250574";
pub const SIEMENS_URL: &str = "https://jobs.siemens.com/some/path";

/// State without memoization.
pub fn create_test_state() -> AppState {
    AppState::with_cache(Arc::new(NullCache::new()))
}

/// State with a small LRU cache and a custom batch limit.
pub fn create_cached_state(capacity: usize, max_batch_size: usize) -> AppState {
    let capacity = NonZeroUsize::new(capacity).unwrap();
    AppState::new(Arc::new(MemoryCache::new(capacity)), max_batch_size)
}

/// Health plus the API routes, without rate limiting (the test transport has
/// no peer address to key on).
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
