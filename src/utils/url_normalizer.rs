//! Posting URL parsing and input sanitizing.
//!
//! [`parse_posting_url`] turns a raw string into a [`NormalizedUrl`]: host
//! lowercased with a leading `www.` removed, path split into non-empty
//! segments, query parameters indexed by exact key.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::entities::NormalizedUrl;

/// Runs of two or more `&`.
static REPEATED_AMPERSANDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&{2,}").unwrap());

/// Errors that can occur while parsing a posting URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses a raw posting URL.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Lowercased, leading `www.` stripped
/// 3. **Path**: Split on `/`, empty segments dropped, percent-encoding kept
/// 4. **Query**: Decoded pairs, keys case-sensitive, last value wins
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```
/// use jobhint::utils::url_normalizer::parse_posting_url;
///
/// let url = parse_posting_url("https://WWW.Example.com//jobs/42/?ref=li").unwrap();
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.segments(), ["jobs", "42"]);
/// assert_eq!(url.query_param("ref"), Some("li"));
/// ```
pub fn parse_posting_url(input: &str) -> Result<NormalizedUrl, UrlNormalizationError> {
    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?;
    let host = strip_www(&host.to_ascii_lowercase()).to_string();

    let segments = url
        .path_segments()
        .map(|parts| {
            parts
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

    Ok(NormalizedUrl::new(host, segments, query, url.to_string()))
}

/// Removes a single leading `www.` label.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Cleans up a pasted URL before deduction.
///
/// - surrounding whitespace is trimmed
/// - every `?` after the first becomes `&`
/// - the fragment is dropped
/// - runs of `&` collapse into one
///
/// # Examples
///
/// ```
/// use jobhint::utils::url_normalizer::sanitize_input;
///
/// assert_eq!(
///     sanitize_input(" https://a.io/x?utm_source=li?ref=x&&y=1#apply "),
///     "https://a.io/x?utm_source=li&ref=x&y=1"
/// );
/// ```
pub fn sanitize_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut cleaned = match trimmed.split_once('?') {
        Some((head, tail)) => format!("{head}?{}", tail.replace('?', "&")),
        None => trimmed.to_string(),
    };

    if let Some(idx) = cleaned.find('#') {
        cleaned.truncate(idx);
    }

    REPEATED_AMPERSANDS.replace_all(&cleaned, "&").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_host_and_strips_www() {
        let url = parse_posting_url("https://WWW.LinkedIn.COM/jobs/view/3812345678").unwrap();
        assert_eq!(url.host(), "linkedin.com");
    }

    #[test]
    fn test_parse_keeps_inner_www_labels() {
        let url = parse_posting_url("https://jobs.www.example.com/").unwrap();
        assert_eq!(url.host(), "jobs.www.example.com");
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let url = parse_posting_url("https://example.com//a///b/").unwrap();
        assert_eq!(url.segments(), ["a", "b"]);
    }

    #[test]
    fn test_parse_root_path_has_no_segments() {
        let url = parse_posting_url("https://example.com").unwrap();
        assert!(url.segments().is_empty());
        assert_eq!(url.href(), "https://example.com/");
    }

    #[test]
    fn test_parse_query_last_value_wins() {
        let url = parse_posting_url("https://example.com/?src=a&src=b&Src=c").unwrap();
        assert_eq!(url.query_param("src"), Some("b"));
        assert_eq!(url.query_param("Src"), Some("c"));
    }

    #[test]
    fn test_parse_query_values_are_decoded() {
        let url = parse_posting_url("https://example.com/?ref=https%3A%2F%2Fwww.xing.com%2F").unwrap();
        assert_eq!(url.query_param("ref"), Some("https://www.xing.com/"));
    }

    #[test]
    fn test_parse_keeps_path_case() {
        let url = parse_posting_url("https://Example.com/en-US/Azenta/job/_R20250574").unwrap();
        assert_eq!(url.segments(), ["en-US", "Azenta", "job", "_R20250574"]);
    }

    #[test]
    fn test_parse_ip_host() {
        let url = parse_posting_url("http://192.168.1.1:8080/careers").unwrap();
        assert_eq!(url.host(), "192.168.1.1");
    }

    #[test]
    fn test_parse_invalid_url() {
        let result = parse_posting_url("not a url");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(matches!(
            parse_posting_url("").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_parse_no_protocol() {
        assert!(matches!(
            parse_posting_url("example.com/jobs/1").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_parse_unsupported_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "mailto:jobs@example.com",
            "javascript:alert(1)",
            "file:///etc/passwd",
        ] {
            assert!(
                matches!(
                    parse_posting_url(input).unwrap_err(),
                    UrlNormalizationError::UnsupportedProtocol
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_strip_www() {
        assert_eq!(strip_www("www.example.com"), "example.com");
        assert_eq!(strip_www("example.com"), "example.com");
        assert_eq!(strip_www("www2.example.com"), "www2.example.com");
    }

    #[test]
    fn test_sanitize_extra_question_marks() {
        assert_eq!(
            sanitize_input("https://a.io/x?a=1?b=2?c=3"),
            "https://a.io/x?a=1&b=2&c=3"
        );
    }

    #[test]
    fn test_sanitize_strips_fragment() {
        assert_eq!(sanitize_input("https://a.io/x#top"), "https://a.io/x");
        assert_eq!(sanitize_input("https://a.io/x?a=1#top"), "https://a.io/x?a=1");
    }

    #[test]
    fn test_sanitize_collapses_ampersands() {
        assert_eq!(sanitize_input("https://a.io/?a=1&&&b=2"), "https://a.io/?a=1&b=2");
    }

    #[test]
    fn test_sanitize_empty_and_whitespace() {
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn test_sanitize_leaves_clean_url_alone() {
        let url = "https://boards.greenhouse.io/acme/jobs/123456";
        assert_eq!(sanitize_input(url), url);
    }
}
