//! Domain entity for the final deduction result.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Posting metadata deduced from a URL.
///
/// `found_on`, `provider` and `external_id` are never empty;
/// `provider_tenant` is empty (not absent) when unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeducedFields {
    /// Channel the posting was found on (referral, board, or `corporate-site`).
    pub found_on: String,
    /// ATS or board that hosts the posting, lowercase.
    pub provider: String,
    /// Company namespace inside the provider.
    pub provider_tenant: String,
    /// Stable identifier of the posting.
    pub external_id: String,
    pub hiring_company_name: Option<String>,
    /// Talent agency that published the posting.
    pub posting_company_name: Option<String>,
    pub title: Option<String>,
}

/// Legacy key names some consumers still read.
///
/// Always derived from a [`DeducedFields`]; there is no way to set these
/// independently of the canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAliases<'a> {
    /// Mirrors `found_on`.
    pub source: &'a str,
    /// Mirrors `hiring_company_name`.
    pub company: Option<&'a str>,
    /// Mirrors `posting_company_name`.
    pub talent_agency: Option<&'a str>,
}

impl DeducedFields {
    /// Compatibility view over the canonical fields.
    pub fn legacy(&self) -> LegacyAliases<'_> {
        LegacyAliases {
            source: &self.found_on,
            company: self.hiring_company_name.as_deref(),
            talent_agency: self.posting_company_name.as_deref(),
        }
    }
}

/// Serializes canonical keys (camelCase) followed by the legacy aliases.
/// Unset optional fields are omitted.
impl Serialize for DeducedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let legacy = self.legacy();
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("foundOn", &self.found_on)?;
        map.serialize_entry("provider", &self.provider)?;
        map.serialize_entry("providerTenant", &self.provider_tenant)?;
        map.serialize_entry("externalId", &self.external_id)?;
        if let Some(name) = &self.hiring_company_name {
            map.serialize_entry("hiringCompanyName", name)?;
        }
        if let Some(name) = &self.posting_company_name {
            map.serialize_entry("postingCompanyName", name)?;
        }
        if let Some(title) = &self.title {
            map.serialize_entry("title", title)?;
        }

        map.serialize_entry("source", legacy.source)?;
        if let Some(company) = legacy.company {
            map.serialize_entry("company", company)?;
        }
        if let Some(agency) = legacy.talent_agency {
            map.serialize_entry("talentAgency", agency)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DeducedFields {
        DeducedFields {
            found_on: "linkedin".to_string(),
            provider: "greenhouse".to_string(),
            provider_tenant: "acme".to_string(),
            external_id: "123456".to_string(),
            hiring_company_name: Some("acme".to_string()),
            posting_company_name: None,
            title: None,
        }
    }

    #[test]
    fn test_legacy_view_mirrors_canonical_fields() {
        let fields = sample();
        let legacy = fields.legacy();
        assert_eq!(legacy.source, "linkedin");
        assert_eq!(legacy.company, Some("acme"));
        assert_eq!(legacy.talent_agency, None);
    }

    #[test]
    fn test_serialize_includes_legacy_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "foundOn": "linkedin",
                "provider": "greenhouse",
                "providerTenant": "acme",
                "externalId": "123456",
                "hiringCompanyName": "acme",
                "source": "linkedin",
                "company": "acme"
            })
        );
    }

    #[test]
    fn test_serialize_agency_and_title() {
        let mut fields = sample();
        fields.hiring_company_name = None;
        fields.posting_company_name = Some("hays".to_string());
        fields.title = Some("Rust Engineer".to_string());

        let value = serde_json::to_value(fields).unwrap();
        assert_eq!(value["postingCompanyName"], "hays");
        assert_eq!(value["talentAgency"], "hays");
        assert_eq!(value["title"], "Rust Engineer");
        assert!(value.get("hiringCompanyName").is_none());
        assert!(value.get("company").is_none());
    }

    #[test]
    fn test_empty_tenant_is_serialized() {
        let mut fields = sample();
        fields.provider_tenant = String::new();
        let value = serde_json::to_value(fields).unwrap();
        assert_eq!(value["providerTenant"], "");
    }
}
