//! Core domain entities representing the deduction data model.
//!
//! Entities are created fresh for every deduction and discarded afterwards;
//! none of them is shared or mutated across calls.
//!
//! # Entity Types
//!
//! - [`NormalizedUrl`] - A parsed posting URL (host, path segments, query)
//! - [`RawExtraction`] - Partial fields read by a provider extractor
//! - [`DeducedFields`] - Final resolved record, with its [`LegacyAliases`] view
//! - [`JobForm`] - Submission form fields that a deduction can pre-fill

pub mod deduced;
pub mod extraction;
pub mod job_form;
pub mod posting_url;

pub use deduced::{DeducedFields, LegacyAliases};
pub use extraction::RawExtraction;
pub use job_form::JobForm;
pub use posting_url::NormalizedUrl;
