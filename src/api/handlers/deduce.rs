//! Handlers for the deduce endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::deduce::{
    BatchSummary, DeduceBatchRequest, DeduceBatchResponse, DeduceQuery, DeduceResultItem,
    DeducedRecord,
};
use crate::error::AppError;
use crate::state::AppState;

/// Deduces posting fields for a single URL.
///
/// # Endpoint
///
/// `GET /api/deduce?url=<raw>`
///
/// The URL is deduced exactly as given (no sanitizing). An unusable URL is
/// not an error: the response is `200` with `{}`.
///
/// # Response
///
/// ```json
/// {
///   "foundOn": "corporate-site",
///   "provider": "greenhouse",
///   "providerTenant": "acme",
///   "externalId": "123456",
///   "hiringCompanyName": "acme",
///   "source": "corporate-site",
///   "company": "acme"
/// }
/// ```
pub async fn deduce_handler(
    State(state): State<AppState>,
    Query(query): Query<DeduceQuery>,
) -> Result<Json<DeducedRecord>, AppError> {
    query.validate()?;

    let fields = state.deduction_service.deduce(&query.url).await;
    Ok(Json(DeducedRecord(fields)))
}

/// Deduces posting fields for a batch of URLs.
///
/// # Endpoint
///
/// `POST /api/deduce`
///
/// # Batch Processing
///
/// Each URL is deduced independently; an unusable one yields `fields: {}`
/// and is counted as `empty`.
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://jobs.lever.co/acme/abc-123", "not a url"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "recognized": 1, "empty": 1 },
///   "items": [
///     { "url": "https://jobs.lever.co/acme/abc-123", "fields": { "provider": "lever", "...": "..." } },
///     { "url": "not a url", "fields": {} }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty or longer than the
/// configured batch limit.
pub async fn deduce_batch_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeduceBatchRequest>,
) -> Result<Json<DeduceBatchResponse>, AppError> {
    payload.validate()?;

    if payload.urls.len() > state.max_batch_size {
        return Err(AppError::bad_request(
            "Too many URLs in batch",
            json!({ "max": state.max_batch_size, "got": payload.urls.len() }),
        ));
    }

    let results = state.deduction_service.deduce_batch(&payload.urls).await;

    let total = results.len();
    let recognized = results.iter().filter(|r| r.is_some()).count();

    let items = payload
        .urls
        .into_iter()
        .zip(results)
        .map(|(url, fields)| DeduceResultItem {
            url,
            fields: DeducedRecord(fields),
        })
        .collect();

    Ok(Json(DeduceBatchResponse {
        summary: BatchSummary {
            total,
            recognized,
            empty: total - recognized,
        },
        items,
    }))
}
