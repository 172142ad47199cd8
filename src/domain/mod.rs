//! Domain layer: deduction entities and the deduction engine.
//!
//! Nothing in here performs I/O or keeps mutable state; every call to
//! [`deduction::deduce`] depends only on its input and the compiled-in tables.
//!
//! # Architecture
//!
//! - [`entities`] - Data model (parsed URL, raw extraction, deduced fields, job form)
//! - [`deduction`] - Registry, extractors, heuristics and field resolution
//!
//! Caching, metrics and HTTP concerns live in [`crate::application`] and
//! [`crate::api`].

pub mod deduction;
pub mod entities;
