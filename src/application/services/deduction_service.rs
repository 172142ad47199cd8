//! Memoizing facade over the deduction engine.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::deduction::{Registry, deduce, registry};
use crate::domain::entities::{DeducedFields, JobForm};
use crate::infrastructure::cache::CacheService;
use crate::utils::url_normalizer::sanitize_input;

/// Counter incremented once per computed (non-memoized) deduction.
pub const DEDUCTIONS_TOTAL: &str = "jobhint_deductions_total";

/// Result of merging a deduction into a submission form.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefillOutcome {
    /// The sanitized URL that was deduced.
    pub url: String,
    pub deduced: Option<DeducedFields>,
    pub form: JobForm,
    /// Names of the form fields that were filled, in form order.
    pub filled: Vec<&'static str>,
}

/// Service running deductions through a memoization cache.
///
/// The engine is deterministic, so a cached result is always identical to a
/// fresh one; the cache only saves work.
pub struct DeductionService {
    cache: Arc<dyn CacheService>,
}

impl DeductionService {
    /// Creates a new deduction service.
    pub fn new(cache: Arc<dyn CacheService>) -> Self {
        Self { cache }
    }

    /// Deduces fields for one raw URL, consulting the cache first.
    ///
    /// Cache errors are logged and treated as misses; this never fails.
    pub async fn deduce(&self, raw_url: &str) -> Option<DeducedFields> {
        match self.cache.get(raw_url).await {
            Ok(Some(hit)) => return hit,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Cache lookup failed, deducing directly"),
        }

        let result = deduce(raw_url);
        record(&result);

        if let Err(e) = self.cache.put(raw_url, result.clone()).await {
            warn!(error = %e, "Failed to memoize deduction");
        }

        result
    }

    /// Deduces every URL independently, preserving input order.
    ///
    /// An unparseable URL yields `None` at its position and never affects
    /// the rest of the batch.
    pub async fn deduce_batch(&self, raw_urls: &[String]) -> Vec<Option<DeducedFields>> {
        let mut results = Vec::with_capacity(raw_urls.len());
        for raw in raw_urls {
            results.push(self.deduce(raw).await);
        }
        debug!(
            total = results.len(),
            recognized = results.iter().filter(|r| r.is_some()).count(),
            "Batch deduced"
        );
        results
    }

    /// Sanitizes `raw_url`, deduces it, and fills blank fields of `form`.
    ///
    /// With `disable_ats` set, provider, tenant and external id stay untouched.
    pub async fn prefill(&self, raw_url: &str, mut form: JobForm, disable_ats: bool) -> PrefillOutcome {
        let url = sanitize_input(raw_url);
        let deduced = self.deduce(&url).await;

        let filled = match &deduced {
            Some(fields) => form.prefill(fields, disable_ats),
            None => Vec::new(),
        };
        debug!(url = %url, ?filled, disable_ats, "Form prefilled");

        PrefillOutcome {
            url,
            deduced,
            form,
            filled,
        }
    }

    /// The provider registry in precedence order.
    pub fn providers(&self) -> &'static Registry {
        registry()
    }

    /// Cache backend, for health reporting.
    pub fn cache(&self) -> &Arc<dyn CacheService> {
        &self.cache
    }
}

fn record(result: &Option<DeducedFields>) {
    match result {
        Some(fields) => {
            metrics::counter!(DEDUCTIONS_TOTAL, "provider" => fields.provider.clone()).increment(1)
        }
        None => metrics::counter!(DEDUCTIONS_TOTAL, "outcome" => "empty").increment(1),
    }
}
