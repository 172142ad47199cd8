//! Business logic services for the application layer.

pub mod deduction_service;

pub use deduction_service::{DeductionService, PrefillOutcome};
