//! Domain entity for the job submission form the deduction pre-fills.

use serde::{Deserialize, Serialize};

use super::DeducedFields;

/// The URL-derivable part of a job submission form.
///
/// Values typed by the user always win: [`JobForm::prefill`] only writes
/// into fields that are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl JobForm {
    /// Copies deduced values into blank fields and returns the names of the
    /// fields it filled (camelCase, form order).
    ///
    /// With `disable_ats` set, `provider`, `providerTenant` and `externalId`
    /// are left alone whatever their state.
    pub fn prefill(&mut self, deduced: &DeducedFields, disable_ats: bool) -> Vec<&'static str> {
        let mut filled = Vec::new();

        if fill(&mut self.found_on, Some(&deduced.found_on)) {
            filled.push("foundOn");
        }
        if !disable_ats && fill(&mut self.external_id, Some(&deduced.external_id)) {
            filled.push("externalId");
        }
        if fill(
            &mut self.hiring_company_name,
            deduced.hiring_company_name.as_deref(),
        ) {
            filled.push("hiringCompanyName");
        }
        if fill(
            &mut self.posting_company_name,
            deduced.posting_company_name.as_deref(),
        ) {
            filled.push("postingCompanyName");
        }
        if !disable_ats && fill(&mut self.provider, Some(&deduced.provider)) {
            filled.push("provider");
        }
        if !disable_ats && fill(&mut self.provider_tenant, Some(&deduced.provider_tenant)) {
            filled.push("providerTenant");
        }
        if fill(&mut self.title, deduced.title.as_deref()) {
            filled.push("title");
        }

        filled
    }
}

/// Writes `value` into `slot` when the slot is blank and the value is not.
fn fill(slot: &mut Option<String>, value: Option<&str>) -> bool {
    let blank = slot.as_deref().is_none_or(|current| current.trim().is_empty());
    match value {
        Some(v) if blank && !v.is_empty() => {
            *slot = Some(v.to_string());
            true
        }
        _ => false,
    }
}
