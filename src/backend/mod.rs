//! The backend boundary of the harness.
//!
//! A backend is anything that can run a [`Query`] under an [`ExecConfig`]
//! and report a [`QueryResult`]. Real protocol clients live outside this
//! crate; the implementations here are for dry runs and tests.

mod hive;
mod mock;
mod types;

pub use hive::parse_hive_time_taken;
pub use mock::{DryRunBackend, FailingBackend, Invocation, MockBackend};
pub use types::{Query, QueryResult};

use crate::exec_config::ExecConfig;

/// A function that executes a query against some backend.
///
/// Implemented for any `Fn(&Query, &ExecConfig) -> QueryResult`, so plain
/// closures and function items can be handed to an executor directly.
/// Calls block until the backend is done; timeouts are the backend's concern.
pub trait ExecFunction {
    /// Runs `query` using `config` and reports the outcome.
    fn execute(&self, query: &Query, config: &ExecConfig) -> QueryResult;
}

impl<F> ExecFunction for F
where
    F: Fn(&Query, &ExecConfig) -> QueryResult,
{
    fn execute(&self, query: &Query, config: &ExecConfig) -> QueryResult {
        self(query, config)
    }
}
