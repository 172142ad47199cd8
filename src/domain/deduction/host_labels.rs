//! Host-label heuristics shared by the extractors and the no-match fallback.
//!
//! Hosts are split on `.`; the public suffix is one label, or two when the
//! last two labels form a known multi-level suffix such as `co.uk`.

use super::tables::{is_generic_job_label, is_multi_level_suffix};

/// Provider name used when nothing better is known.
pub const CORPORATE_SITE: &str = "corporate-site";

/// Number of trailing labels that make up the public suffix (1 or 2).
pub fn public_suffix_len(labels: &[&str]) -> usize {
    match labels {
        [.., second_level, top_level] if is_multi_level_suffix(second_level, top_level) => 2,
        _ => 1,
    }
}

/// Picks the company label of a host.
///
/// Starting at the label right before the public suffix and moving left,
/// returns the first label that is not a generic job/career word. When every
/// candidate is generic, the label right before the suffix is returned (or
/// the only label of a single-label host).
///
/// ```
/// use jobhint::domain::deduction::host_labels::company_from_host;
///
/// assert_eq!(company_from_host("careers.microsoft.com"), "microsoft");
/// assert_eq!(company_from_host("jobs.acme.co.uk"), "acme");
/// assert_eq!(company_from_host("localhost"), "localhost");
/// ```
pub fn company_from_host(host: &str) -> &str {
    let labels: Vec<&str> = host.split('.').collect();
    let before_suffix = labels.len().checked_sub(public_suffix_len(&labels) + 1);

    if let Some(stop) = before_suffix {
        let found = labels[..=stop]
            .iter()
            .rev()
            .copied()
            .find(|label| !label.is_empty() && !is_generic_job_label(label));
        if let Some(label) = found {
            return label;
        }
        if !labels[stop].is_empty() {
            return labels[stop];
        }
    }

    match labels.first().copied() {
        Some(first) if !first.is_empty() => first,
        _ => host,
    }
}

/// Picks a provider name for a host that no registry entry recognized.
///
/// Takes the leftmost label before the public suffix; when that label is a
/// generic job/career word and another label follows it, the next label is
/// used instead (`jobs.siemens.com` gives `siemens`, `bosch.newats.ai` gives
/// `bosch`).
pub fn provider_from_host(host: &str) -> &str {
    if host.is_empty() {
        return CORPORATE_SITE;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() == 1 {
        return labels[0];
    }

    let cutoff = labels.len() - public_suffix_len(&labels);
    let before_suffix = &labels[..cutoff];

    let candidate = match before_suffix {
        [] => labels[0],
        [first, second, ..] if is_generic_job_label(first) => *second,
        [first, ..] => *first,
    };

    if candidate.is_empty() {
        labels[0]
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_suffix_len() {
        assert_eq!(public_suffix_len(&["acme", "co", "uk"]), 2);
        assert_eq!(public_suffix_len(&["co", "uk"]), 2);
        assert_eq!(public_suffix_len(&["acme", "com"]), 1);
        assert_eq!(public_suffix_len(&["localhost"]), 1);
    }

    #[test]
    fn test_company_skips_generic_subdomains() {
        assert_eq!(company_from_host("jobs.hygraph.com"), "hygraph");
        assert_eq!(company_from_host("karriere.jobs.bosch.de"), "bosch");
    }

    #[test]
    fn test_company_scans_leftwards_past_generic_base() {
        // "jobs" is the label before the suffix, so the scan continues left.
        assert_eq!(company_from_host("acme.jobs.com"), "acme");
    }

    #[test]
    fn test_company_all_generic_falls_back_to_base_label() {
        assert_eq!(company_from_host("jobs.com"), "jobs");
        assert_eq!(company_from_host("careers.jobs.com"), "jobs");
    }

    #[test]
    fn test_company_multi_level_suffix() {
        assert_eq!(company_from_host("reed.co.uk"), "reed");
        assert_eq!(company_from_host("careers.tesco.co.uk"), "tesco");
    }

    #[test]
    fn test_company_bare_suffix_host() {
        assert_eq!(company_from_host("co.uk"), "co");
    }

    #[test]
    fn test_company_single_label() {
        assert_eq!(company_from_host("intranet"), "intranet");
    }

    #[test]
    fn test_provider_leftmost_label() {
        assert_eq!(provider_from_host("bosch.newats.ai"), "bosch");
        assert_eq!(provider_from_host("example.com"), "example");
    }

    #[test]
    fn test_provider_skips_one_generic_label() {
        assert_eq!(provider_from_host("jobs.siemens.com"), "siemens");
        assert_eq!(provider_from_host("karriere.porsche.de"), "porsche");
    }

    #[test]
    fn test_provider_generic_label_without_alternative() {
        assert_eq!(provider_from_host("jobs.com"), "jobs");
    }

    #[test]
    fn test_provider_multi_level_suffix() {
        assert_eq!(provider_from_host("careers.tesco.co.uk"), "tesco");
        assert_eq!(provider_from_host("co.uk"), "co");
    }

    #[test]
    fn test_provider_single_label_and_empty() {
        assert_eq!(provider_from_host("localhost"), "localhost");
        assert_eq!(provider_from_host(""), CORPORATE_SITE);
    }
}
