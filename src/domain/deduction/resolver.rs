//! Field resolution: turns a raw extraction (or nothing) into final fields.
//!
//! # Precedence
//!
//! | field               | order                                                          |
//! |---------------------|----------------------------------------------------------------|
//! | provider            | extractor provider, legacy source, `corporate-site`            |
//! | foundOn             | referral, then `corporate-site` for an ATS or provider otherwise |
//! | providerTenant      | extractor tenant, then (ATS only) company or host label, else `""` |
//! | hiringCompanyName   | extractor company, then host label unless the host is an agency |
//! | postingCompanyName  | extractor agency, then the matched agency label                |
//! | externalId          | extractor id, last non-generic segment, URL hash               |
//! | title               | extractor title only                                           |

use super::host_labels::{CORPORATE_SITE, company_from_host, provider_from_host};
use super::tables::{is_ats, is_fallback_stop_word, is_generic_path_word};
use super::talent_agency::AgencyHit;
use crate::domain::entities::{DeducedFields, NormalizedUrl, RawExtraction};
use crate::utils::stable_hash::stable_hash;

/// Per-call signals gathered before resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub url: &'a NormalizedUrl,
    /// Normalized referral source, if the query carried one.
    pub referral: Option<&'a str>,
    /// Talent agency the host belongs to, if any.
    pub agency: Option<AgencyHit>,
}

impl ResolveContext<'_> {
    fn host_company(&self) -> Option<String> {
        let label = company_from_host(self.url.host());
        (!label.is_empty()).then(|| label.to_string())
    }

    fn inferred_hiring_company(&self) -> Option<String> {
        match self.agency {
            Some(_) => None,
            None => self.host_company(),
        }
    }

    fn agency_label(&self) -> Option<String> {
        self.agency.map(|hit| hit.label().to_string())
    }

    fn url_hash(&self) -> String {
        stable_hash(self.url.href_without_query())
    }
}

/// Resolves the fields of a URL a registry entry recognized.
pub fn resolve_matched(raw: &RawExtraction, ctx: &ResolveContext<'_>) -> DeducedFields {
    let provider = raw
        .provider_name()
        .map(str::to_lowercase)
        .unwrap_or_else(|| CORPORATE_SITE.to_string());
    let ats = is_ats(&provider);

    let found_on = match ctx.referral {
        Some(referral) => referral.to_string(),
        None if ats => CORPORATE_SITE.to_string(),
        None => provider.clone(),
    };

    let provider_tenant = match raw.tenant() {
        Some(tenant) => tenant.to_string(),
        None if ats => raw
            .company()
            .map(str::to_string)
            .or_else(|| ctx.host_company())
            .unwrap_or_default(),
        None => String::new(),
    };

    let hiring_company_name = raw
        .company()
        .map(str::to_string)
        .or_else(|| ctx.inferred_hiring_company());

    let posting_company_name = raw
        .talent_agency()
        .map(str::to_string)
        .or_else(|| ctx.agency_label());

    let external_id = raw
        .external_id()
        .map(str::to_string)
        .or_else(|| {
            ctx.url
                .last_segment()
                .filter(|seg| !is_generic_path_word(seg))
                .map(str::to_string)
        })
        .unwrap_or_else(|| ctx.url_hash());

    let title = raw.title.clone().filter(|t| !t.is_empty());

    DeducedFields {
        found_on,
        provider,
        provider_tenant,
        external_id,
        hiring_company_name,
        posting_company_name,
        title,
    }
}

/// Resolves the fields of a URL no registry entry recognized.
///
/// Tenant is always empty here, and `foundOn` is the referral or
/// `corporate-site`: an unknown host is taken to be the employer's own site.
pub fn resolve_fallback(ctx: &ResolveContext<'_>) -> DeducedFields {
    let host = ctx.url.host();

    let provider = match provider_from_host(host) {
        "" => CORPORATE_SITE.to_string(),
        label => label.to_string(),
    };

    let external_id = ctx
        .url
        .segment_after("job")
        .or_else(|| {
            ctx.url
                .last_segment()
                .filter(|seg| !is_fallback_stop_word(seg))
        })
        .map(str::to_string)
        .unwrap_or_else(|| ctx.url_hash());

    DeducedFields {
        found_on: ctx.referral.unwrap_or(CORPORATE_SITE).to_string(),
        provider,
        provider_tenant: String::new(),
        external_id,
        hiring_company_name: ctx.inferred_hiring_company(),
        posting_company_name: ctx.agency_label(),
        title: None,
    }
}
