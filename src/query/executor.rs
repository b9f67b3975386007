//! Query execution against a pluggable backend function.
//!
//! The executor does not know how to talk to any database. It binds the
//! target, optionally runs a planning pass, delegates the timed run to its
//! [`ExecFunction`] and applies the error policy to the outcome.

use std::time::Instant;

use tracing::{debug, info};

use crate::backend::{ExecFunction, Query, QueryResult};
use crate::error::{HarnessError, Result};
use crate::exec_config::ExecConfig;

/// Prefix that turns a query into a plan-only statement.
pub const PLAN_DIRECTIVE: &str = "EXPLAIN ";

/// What the executor does when the backend reports a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return a [`HarnessError::QueryExecution`] carrying the backend's error.
    FailFast,
    /// Log and keep the failed result for later inspection.
    Continue,
}

impl ErrorPolicy {
    /// Maps the perf framework's `exit_on_error` flag to a policy.
    pub fn from_exit_on_error(exit_on_error: bool) -> Self {
        if exit_on_error {
            Self::FailFast
        } else {
            Self::Continue
        }
    }
}

/// Runs one query against one backend and keeps the latest result.
pub struct QueryExecutor<F> {
    name: String,
    query: Query,
    exec_fn: F,
    config: ExecConfig,
    error_policy: ErrorPolicy,
    result: Option<QueryResult>,
}

impl<F: ExecFunction> QueryExecutor<F> {
    /// Creates a new query executor.
    ///
    /// `name` identifies the executor in logs (e.g. `"beeswax"`, `"hive"`).
    pub fn new(
        name: impl Into<String>,
        query: Query,
        exec_fn: F,
        config: ExecConfig,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            query,
            exec_fn,
            config,
            error_policy,
            result: None,
        }
    }

    /// Binds the executor to `target_address` for the next run.
    ///
    /// Has no effect for backend families without an addressable target.
    pub fn prepare(&mut self, target_address: &str) {
        if self.config.family().has_addressable_target() {
            self.config.set_target_address(target_address);
        } else {
            debug!(
                executor = %self.name,
                family = %self.config.family(),
                "Ignoring target address {}",
                target_address
            );
        }
    }

    /// Runs the query and stores the result.
    ///
    /// With `plan_first`, the query is EXPLAINed beforehand so the timed run
    /// does not include the initial metadata loading needed for planning.
    /// The outcome of the planning pass is discarded.
    pub fn execute(&mut self, plan_first: bool) -> Result<()> {
        if plan_first {
            let planning = PlanningScope::enter(&mut self.query);
            debug!(executor = %self.name, "Planning {}", planning.query());
            self.exec_fn.execute(planning.query(), &self.config);
        }

        debug!(executor = %self.name, "Executing {}", self.query);
        let start = Instant::now();
        let result = self.exec_fn.execute(&self.query, &self.config);
        debug!(
            executor = %self.name,
            elapsed_ms = start.elapsed().as_millis() as u64,
            success = result.success,
            "Finished {}",
            self.query.name
        );

        let result = self.result.insert(result);
        if !result.success {
            match self.error_policy {
                ErrorPolicy::FailFast => {
                    return Err(HarnessError::query_execution(result.query_error.clone()));
                }
                ErrorPolicy::Continue => {
                    info!(
                        executor = %self.name,
                        error = %result.query_error,
                        "Continuing execution"
                    );
                }
            }
        }

        Ok(())
    }

    /// Returns the result of the most recent run, if any.
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Returns the backend function.
    pub fn exec_fn(&self) -> &F {
        &self.exec_fn
    }
}

/// Rewrites a query into its plan-only form until dropped.
///
/// The original text is put back on drop, so it is restored however the
/// planning call ends, including by unwinding.
struct PlanningScope<'a> {
    query: &'a mut Query,
    original: String,
}

impl<'a> PlanningScope<'a> {
    fn enter(query: &'a mut Query) -> Self {
        let planned = format!("{PLAN_DIRECTIVE}{}", query.query_str);
        let original = std::mem::replace(&mut query.query_str, planned);
        Self { query, original }
    }

    fn query(&self) -> &Query {
        &*self.query
    }
}

impl Drop for PlanningScope<'_> {
    fn drop(&mut self) {
        self.query.query_str = std::mem::take(&mut self.original);
    }
}
