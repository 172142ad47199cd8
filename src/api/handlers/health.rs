//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "33 providers" },
///     "cache": { "status": "ok", "message": "memory, 120 entries" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state);
    let cache_check = check_cache(&state).await;

    let all_healthy = registry_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_registry(state: &AppState) -> CheckStatus {
    let providers = state.deduction_service.providers();
    if providers.is_empty() {
        CheckStatus::error("Provider registry is empty")
    } else {
        CheckStatus::ok(format!("{} providers", providers.len()))
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let cache = state.deduction_service.cache();
    if cache.health_check().await {
        CheckStatus::ok(format!("{}, {} entries", cache.backend(), cache.len().await))
    } else {
        CheckStatus::error(format!("{} cache unavailable", cache.backend()))
    }
}
