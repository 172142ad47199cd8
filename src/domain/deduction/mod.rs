//! Job-posting field deduction.
//!
//! [`deduce`] is the whole engine: a pure function from a raw URL string to
//! the structured fields of the posting it points at.
//!
//! # Pipeline
//!
//! 1. Parse and normalize the URL ([`parse_posting_url`]); failure yields `None`
//! 2. Classify the host against the talent-agency list ([`talent_agency`])
//! 3. Read the referral source from the query ([`referral`])
//! 4. Look up the first matching provider in the [`registry`]
//! 5. Resolve final fields from the extractor output, or from host heuristics
//!    when nothing matched ([`resolver`])

pub mod extractors;
pub mod host_labels;
pub mod matcher;
pub mod referral;
pub mod registry;
pub mod resolver;
pub mod tables;
pub mod talent_agency;

use tracing::debug;

pub use matcher::DomainMatcher;
pub use registry::{Registry, RegistryEntry, registry};

use crate::domain::entities::{DeducedFields, NormalizedUrl};
use crate::utils::url_normalizer::parse_posting_url;
use resolver::{ResolveContext, resolve_fallback, resolve_matched};

/// Deduces posting fields from a raw URL string.
///
/// Returns `None` (the empty record) when `raw` is not an absolute HTTP(S)
/// URL with a host. Never panics.
///
/// ```
/// use jobhint::domain::deduction::deduce;
///
/// let fields = deduce("https://boards.greenhouse.io/boards/acme/jobs/123456").unwrap();
/// assert_eq!(fields.provider, "greenhouse");
/// assert_eq!(fields.external_id, "123456");
///
/// assert!(deduce("not a url").is_none());
/// ```
pub fn deduce(raw: &str) -> Option<DeducedFields> {
    match parse_posting_url(raw) {
        Ok(url) => Some(deduce_with(registry(), &url)),
        Err(e) => {
            debug!(error = %e, "Unparseable posting URL");
            None
        }
    }
}

/// Deduces fields of an already-parsed URL against a given registry.
pub fn deduce_with(registry: &Registry, url: &NormalizedUrl) -> DeducedFields {
    let referral = referral::referral_source(url);
    let ctx = ResolveContext {
        url,
        referral: referral.as_deref(),
        agency: talent_agency::classify(url.host()),
    };

    match registry.lookup(url.host()) {
        Some(entry) => {
            let raw = (entry.extract)(url);
            let fields = resolve_matched(&raw, &ctx);
            debug!(
                host = url.host(),
                entry = entry.name,
                provider = %fields.provider,
                external_id = %fields.external_id,
                "Registry match"
            );
            fields
        }
        None => {
            let fields = resolve_fallback(&ctx);
            debug!(
                host = url.host(),
                provider = %fields.provider,
                external_id = %fields.external_id,
                "No registry match, using host fallback"
            );
            fields
        }
    }
}
