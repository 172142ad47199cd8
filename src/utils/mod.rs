//! Helpers shared by the domain and the outer layers.
//!
//! - [`url_normalizer`] - URL parsing, normalization and input sanitizing
//! - [`stable_hash`] - Deterministic short hash used for synthetic ids

pub mod stable_hash;
pub mod url_normalizer;
