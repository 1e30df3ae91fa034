//! Common types and utilities for the resmap resource id resolver.
//!
//! This crate provides the pieces shared by the model and resolver crates:
//! - The fixed allow-list of declaration categories (`limits`)
//! - Resolution errors (`diagnostics`)
//! - Resolver configuration (`config`)
//! - Tracing subscriber setup (`tracing_config`)

// Category allow-list and default annotation names
pub mod limits;
pub use limits::{DEFAULT_ANNOTATIONS, SUPPORTED_CATEGORIES, is_supported_category};

// Resolution errors
pub mod diagnostics;
pub use diagnostics::ResolveError;

// Resolver configuration
pub mod config;
pub use config::ResolverConfig;

pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
