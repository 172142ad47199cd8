//! Application layer services.
//!
//! Services wrap the pure engine with the concerns the engine deliberately
//! leaves out: memoization, metrics, and structured logging. HTTP handlers
//! and the CLI talk to the engine through this layer.
//!
//! # Available Services
//!
//! - [`services::deduction_service::DeductionService`] - Memoized deduction, batches, form prefill

pub mod services;
