//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod deduce;
pub mod health;
pub mod metrics;
pub mod prefill;
pub mod providers;

pub use deduce::{deduce_batch_handler, deduce_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use prefill::prefill_handler;
pub use providers::providers_handler;
