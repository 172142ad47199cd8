//! Referral source extraction.
//!
//! A referral is the channel a posting was found on (`linkedin`, `indeed`, ...),
//! read from well-known query parameters.

use url::Url;

use super::tables::{REFERRAL_KEYS, canonical_source};
use crate::domain::entities::NormalizedUrl;
use crate::utils::url_normalizer::strip_www;

/// Returns the normalized referral source of `url`, if any.
///
/// Keys from [`REFERRAL_KEYS`] are tried in order; the first one whose value
/// normalizes to a non-empty name wins.
pub fn referral_source(url: &NormalizedUrl) -> Option<String> {
    let found = REFERRAL_KEYS.iter().find_map(|key| {
        url.query_param(key)
            .filter(|raw| !raw.is_empty())
            .and_then(normalize_source_name)
    });

    if let Some(ref source) = found {
        tracing::trace!(host = url.host(), source = %source, "Referral source");
    }

    found
}

/// Normalizes a free-form source value, a domain or a full URL into a board name.
///
/// ```
/// use jobhint::domain::deduction::referral::normalize_source_name;
///
/// assert_eq!(normalize_source_name("LinkedIn").as_deref(), Some("linkedin"));
/// assert_eq!(normalize_source_name("https://www.lnkd.in/x").as_deref(), Some("linkedin"));
/// assert_eq!(normalize_source_name("  ").as_deref(), None);
/// ```
pub fn normalize_source_name(value: &str) -> Option<String> {
    let mut name = value.trim().to_lowercase();

    if name.starts_with("http://") || name.starts_with("https://") {
        if let Some(host) = Url::parse(&name)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
        {
            name = host;
        }
    }

    let name = strip_www(&name);
    let base = name.split('.').next().unwrap_or(name);

    if base.is_empty() {
        return None;
    }

    Some(canonical_source(base).unwrap_or(base).to_string())
}
