//! API route configuration.

use crate::api::handlers::{
    deduce_batch_handler, deduce_handler, prefill_handler, providers_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None of them needs authentication; they are rate limited
/// by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET    /deduce?url=`  - Deduce one URL
/// - `POST   /deduce`       - Deduce a batch of URLs
/// - `POST   /prefill`      - Sanitize, deduce and merge into a form
/// - `GET    /providers`    - Provider registry in precedence order
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/deduce", get(deduce_handler).post(deduce_batch_handler))
        .route("/prefill", post(prefill_handler))
        .route("/providers", get(providers_handler))
}
