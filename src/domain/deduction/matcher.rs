//! Host matchers used by registry entries.

use regex::Regex;

use super::talent_agency::is_same_or_subdomain;

/// One way a registry entry can recognize a normalized host.
#[derive(Debug, Clone)]
pub enum DomainMatcher {
    /// Host equals the literal.
    Exact(&'static str),
    /// Host equals the literal or is one of its subdomains.
    Suffix(&'static str),
    /// Regex tested directly against the host.
    Pattern(Regex),
}

impl DomainMatcher {
    /// Builds a [`DomainMatcher::Pattern`].
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Patterns are compiled-in
    /// constants, so this only fires on a programming error.
    pub fn pattern(pattern: &str) -> Self {
        Self::Pattern(Regex::new(pattern).unwrap())
    }

    /// Whether this matcher recognizes `host`.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Exact(domain) => host == *domain,
            Self::Suffix(domain) => is_same_or_subdomain(host, domain),
            Self::Pattern(re) => re.is_match(host),
        }
    }

    /// Human-readable form, as listed by the providers endpoint.
    pub fn describe(&self) -> String {
        match self {
            Self::Exact(domain) => format!("={domain}"),
            Self::Suffix(domain) => (*domain).to_string(),
            Self::Pattern(re) => format!("/{}/", re.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let m = DomainMatcher::Exact("jobs.smartrecruiters.com");
        assert!(m.matches("jobs.smartrecruiters.com"));
        assert!(!m.matches("eu.jobs.smartrecruiters.com"));
        assert!(!m.matches("smartrecruiters.com"));
    }

    #[test]
    fn test_suffix() {
        let m = DomainMatcher::Suffix("bar.com");
        assert!(m.matches("bar.com"));
        assert!(m.matches("foo.bar.com"));
        assert!(!m.matches("foobar.com"));
        assert!(!m.matches("bar.com.au"));
    }

    #[test]
    fn test_pattern() {
        let m = DomainMatcher::pattern(r"\.myworkdayjobs\.com$");
        assert!(m.matches("azenta.wd1.myworkdayjobs.com"));
        assert!(!m.matches("myworkdayjobs.com"));
        assert!(!m.matches("myworkdayjobs.com.evil.io"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(DomainMatcher::Exact("a.io").describe(), "=a.io");
        assert_eq!(DomainMatcher::Suffix("a.io").describe(), "a.io");
        assert_eq!(
            DomainMatcher::pattern(r"\.lever\.co$").describe(),
            r"/\.lever\.co$/"
        );
    }
}
