//! DTOs for the form prefill endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::deduce::DeducedRecord;
use crate::domain::entities::JobForm;

/// Body of `POST /api/prefill`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrefillRequest {
    /// Raw URL as pasted by the user; sanitized before deduction.
    #[validate(length(min = 1, max = 8192))]
    pub url: String,

    /// Current form state. Non-blank fields are never overwritten.
    #[serde(default)]
    pub form: JobForm,

    /// Leave provider, tenant and external id alone.
    #[serde(default)]
    pub disable_ats: bool,
}

#[derive(Debug, Serialize)]
pub struct PrefillResponse {
    /// The sanitized URL.
    pub url: String,
    pub deduced: DeducedRecord,
    pub form: JobForm,
    pub filled: Vec<&'static str>,
}
