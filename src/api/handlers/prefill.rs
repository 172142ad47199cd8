//! Handler for the form prefill endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::deduce::DeducedRecord;
use crate::api::dto::prefill::{PrefillRequest, PrefillResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Merges a URL deduction into a partially filled submission form.
///
/// # Endpoint
///
/// `POST /api/prefill`
///
/// # Merge Rules
///
/// 1. The URL is sanitized (stray `?`, fragments, repeated `&`) before deduction
/// 2. Only blank form fields are filled; typed values always win
/// 3. With `disableAts`, `provider`, `providerTenant` and `externalId` are skipped
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://acme.ashbyhq.com/1234?utm_source=linkedin#apply",
///   "form": { "title": "Backend Engineer" },
///   "disableAts": false
/// }
/// ```
pub async fn prefill_handler(
    State(state): State<AppState>,
    Json(payload): Json<PrefillRequest>,
) -> Result<Json<PrefillResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .deduction_service
        .prefill(&payload.url, payload.form, payload.disable_ats)
        .await;

    Ok(Json(PrefillResponse {
        url: outcome.url,
        deduced: DeducedRecord(outcome.deduced),
        form: outcome.form,
        filled: outcome.filled,
    }))
}
