//! Query execution for the harness.
//!
//! This module sequences a single query's lifecycle: target binding, the
//! optional planning pass, the timed run and the error policy.

pub mod executor;

pub use executor::{ErrorPolicy, QueryExecutor, PLAN_DIRECTIVE};
