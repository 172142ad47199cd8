//! Domain entity for the partial record a provider extractor returns.

/// Fields a provider extractor could read from a posting URL.
///
/// Every field is optional and an empty string counts as absent; the field
/// resolver fills the gaps. Older extractors used different names for some
/// fields, kept here as aliases in the docs:
///
/// | field                 | alias          |
/// |-----------------------|----------------|
/// | `provider_tenant`     | `tenant`       |
/// | `hiring_company_name` | `company`      |
/// | `posting_company_name`| `talentAgency` |
/// | `found_on`            | `source`       |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExtraction {
    pub provider: Option<String>,
    pub provider_tenant: Option<String>,
    pub external_id: Option<String>,
    pub hiring_company_name: Option<String>,
    pub posting_company_name: Option<String>,
    pub title: Option<String>,
    pub found_on: Option<String>,
}

impl RawExtraction {
    /// Starts an extraction for a fixed provider name.
    pub fn for_provider(provider: &str) -> Self {
        Self {
            provider: Some(provider.to_string()),
            ..Self::default()
        }
    }

    /// Sets the tenant; an empty tenant is left unset.
    pub fn with_tenant(mut self, tenant: &str) -> Self {
        self.provider_tenant = non_empty(tenant);
        self
    }

    /// Sets the hiring company; an empty name is left unset.
    pub fn with_company(mut self, company: &str) -> Self {
        self.hiring_company_name = non_empty(company);
        self
    }

    /// Sets the external id.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Provider, falling back to the legacy `source` field.
    pub fn provider_name(&self) -> Option<&str> {
        present(&self.provider).or_else(|| present(&self.found_on))
    }

    /// Tenant, if present and non-empty.
    pub fn tenant(&self) -> Option<&str> {
        present(&self.provider_tenant)
    }

    /// Hiring company, if present and non-empty.
    pub fn company(&self) -> Option<&str> {
        present(&self.hiring_company_name)
    }

    /// Posting company (talent agency), if present and non-empty.
    pub fn talent_agency(&self) -> Option<&str> {
        present(&self.posting_company_name)
    }

    /// External id, if present and non-empty.
    pub fn external_id(&self) -> Option<&str> {
        present(&self.external_id)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_skips_empty_values() {
        let raw = RawExtraction::for_provider("jobvite")
            .with_tenant("")
            .with_company("")
            .with_external_id("oAbc123");

        assert_eq!(raw.provider.as_deref(), Some("jobvite"));
        assert!(raw.provider_tenant.is_none());
        assert!(raw.hiring_company_name.is_none());
        assert_eq!(raw.external_id(), Some("oAbc123"));
    }

    #[test]
    fn test_provider_name_falls_back_to_legacy_source() {
        let raw = RawExtraction {
            found_on: Some("reed".to_string()),
            ..RawExtraction::default()
        };
        assert_eq!(raw.provider_name(), Some("reed"));

        let raw = RawExtraction {
            provider: Some(String::new()),
            found_on: Some("reed".to_string()),
            ..RawExtraction::default()
        };
        assert_eq!(raw.provider_name(), Some("reed"));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let raw = RawExtraction {
            external_id: Some(String::new()),
            posting_company_name: Some(String::new()),
            ..RawExtraction::default()
        };
        assert_eq!(raw.external_id(), None);
        assert_eq!(raw.talent_agency(), None);
        assert_eq!(raw.provider_name(), None);
    }
}
