//! Handler for the providers listing.

use axum::{Json, extract::State};

use crate::api::dto::providers::ProviderResponse;
use crate::state::AppState;

/// Lists the provider registry in precedence order.
///
/// # Endpoint
///
/// `GET /api/providers`
///
/// The first entry whose matcher accepts a host wins, so order matters when
/// reading this list.
pub async fn providers_handler(State(state): State<AppState>) -> Json<Vec<ProviderResponse>> {
    let providers = state
        .deduction_service
        .providers()
        .entries()
        .iter()
        .map(ProviderResponse::from)
        .collect();

    Json(providers)
}
