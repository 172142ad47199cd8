//! DTOs for the deduce endpoints.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::DeducedFields;

/// Query of `GET /api/deduce`. URLs are capped at 8 KiB.
#[derive(Debug, Deserialize, Validate)]
pub struct DeduceQuery {
    #[validate(length(min = 1, max = 8192))]
    pub url: String,
}

/// Longest URL accepted by any endpoint, in bytes.
pub const MAX_URL_LENGTH: usize = 8192;

/// Body of `POST /api/deduce`. Every item is held to the single-URL cap.
#[derive(Debug, Deserialize, Validate)]
pub struct DeduceBatchRequest {
    #[validate(
        length(min = 1, message = "At least one URL is required"),
        custom(function = validate_url_lengths)
    )]
    pub urls: Vec<String>,
}

fn validate_url_lengths(urls: &[String]) -> Result<(), ValidationError> {
    match urls.iter().position(|url| url.len() > MAX_URL_LENGTH) {
        Some(index) => {
            let mut error = ValidationError::new("url_too_long");
            error.message = Some(format!("URL exceeds {MAX_URL_LENGTH} bytes").into());
            error.add_param("index".into(), &index);
            Err(error)
        }
        None => Ok(()),
    }
}

/// A deduction result as sent on the wire: the record, or `{}` when the
/// input was not a usable posting URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DeducedRecord(pub Option<DeducedFields>);

impl Serialize for DeducedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(fields) => fields.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Response containing batch results, in request order.
#[derive(Debug, Serialize)]
pub struct DeduceBatchResponse {
    pub summary: BatchSummary,
    pub items: Vec<DeduceResultItem>,
}

#[derive(Debug, Serialize)]
pub struct DeduceResultItem {
    pub url: String,
    pub fields: DeducedRecord,
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub recognized: usize,
    pub empty: usize,
}
