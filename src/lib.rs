//! # jobhint
//!
//! Deduces job-posting metadata from a posting URL: the ATS or board that
//! hosts it, the company tenant inside that provider, the hiring employer,
//! a stable external id, and the channel the posting was found on.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and the pure deduction engine
//! - **Application Layer** ([`application`]) - Memoization, metrics, form prefill
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```
//! use jobhint::domain::deduction::deduce;
//!
//! let fields = deduce("https://azenta.wd1.myworkdayjobs.com/en-US/Azenta/job/_R20250574").unwrap();
//! assert_eq!(fields.provider, "workday");
//! assert_eq!(fields.provider_tenant, "azenta");
//! assert_eq!(fields.external_id, "_R20250574");
//! ```
//!
//! ```bash
//! # Start the HTTP service
//! cargo run
//!
//! # Or deduce from the command line
//! cargo run --bin deduce -- url "https://boards.greenhouse.io/boards/acme/jobs/123456"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DeductionService, PrefillOutcome};
    pub use crate::domain::deduction::{deduce, registry};
    pub use crate::domain::entities::{DeducedFields, JobForm, NormalizedUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::stable_hash::stable_hash;
    pub use crate::utils::url_normalizer::sanitize_input;
}
