//! Talent-agency classification by host.

use super::tables::TALENT_AGENCY_DOMAINS;

/// A host recognized as belonging to a staffing or recruiting intermediary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgencyHit {
    /// The matched entry of the agency domain list.
    pub domain: &'static str,
}

impl AgencyHit {
    /// Registrable label of the agency domain (`hays` for `hays.com`).
    pub fn label(&self) -> &'static str {
        self.domain.split('.').next().unwrap_or(self.domain)
    }
}

/// Matches `host` against the talent-agency list.
///
/// A host matches an entry when it equals the entry or is one of its
/// subdomains; the first matching entry wins.
pub fn classify(host: &str) -> Option<AgencyHit> {
    let hit = TALENT_AGENCY_DOMAINS
        .iter()
        .copied()
        .find(|domain| is_same_or_subdomain(host, domain))
        .map(|domain| AgencyHit { domain });

    if let Some(agency) = hit {
        tracing::trace!(host, agency = agency.domain, "Talent agency host");
    }

    hit
}

/// `host == domain` or `host` ends with `.` + `domain`.
pub fn is_same_or_subdomain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_agency_domain() {
        let hit = classify("hays.com").unwrap();
        assert_eq!(hit.domain, "hays.com");
        assert_eq!(hit.label(), "hays");
    }

    #[test]
    fn test_agency_subdomain() {
        let hit = classify("jobs.michaelpage.com").unwrap();
        assert_eq!(hit.label(), "michaelpage");
    }

    #[test]
    fn test_lookalike_is_not_an_agency() {
        // Suffix match must fall on a label boundary.
        assert_eq!(classify("notadecco.com"), None);
        assert_eq!(classify("hays.com.evil.io"), None);
    }

    #[test]
    fn test_regular_host_is_not_an_agency() {
        assert_eq!(classify("boards.greenhouse.io"), None);
    }

    #[test]
    fn test_is_same_or_subdomain() {
        assert!(is_same_or_subdomain("bar.com", "bar.com"));
        assert!(is_same_or_subdomain("foo.bar.com", "bar.com"));
        assert!(!is_same_or_subdomain("foobar.com", "bar.com"));
        assert!(!is_same_or_subdomain("bar.com", "foo.bar.com"));
    }
}
