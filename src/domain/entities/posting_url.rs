//! Domain entity representing a parsed posting URL.

use std::collections::HashMap;

/// A posting URL broken into the parts the deduction engine looks at.
///
/// Only produced from a syntactically valid `http`/`https` URL with a host
/// (see [`crate::utils::url_normalizer::parse_posting_url`]); a raw string that
/// cannot be parsed never becomes a `NormalizedUrl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    host: String,
    segments: Vec<String>,
    query: HashMap<String, String>,
    href: String,
}

impl NormalizedUrl {
    /// Creates a new NormalizedUrl.
    ///
    /// `host` is expected lowercase with any leading `www.` removed, `segments`
    /// without empty entries. Query keys are case-sensitive; the last value
    /// wins for duplicated keys.
    pub fn new(
        host: String,
        segments: Vec<String>,
        query: HashMap<String, String>,
        href: String,
    ) -> Self {
        Self {
            host,
            segments,
            query,
            href,
        }
    }

    /// Lowercase host without a leading `www.` label.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Non-empty path segments, still percent-encoded.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Serialized URL as parsed.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Query parameter value by exact key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The serialized URL cut at the first `?`.
    pub fn href_without_query(&self) -> &str {
        self.href.split('?').next().unwrap_or(&self.href)
    }

    /// Last path segment, if the path has any.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The segment right after the first segment equal to `token` (ASCII case-insensitive).
    pub fn segment_after(&self, token: &str) -> Option<&str> {
        let idx = self
            .segments
            .iter()
            .position(|s| s.eq_ignore_ascii_case(token))?;
        self.segments.get(idx + 1).map(String::as_str)
    }

    /// Leftmost host label (`acme` for `acme.wd1.myworkdayjobs.com`).
    pub fn first_label(&self) -> &str {
        self.host.split('.').next().unwrap_or(&self.host)
    }
}
