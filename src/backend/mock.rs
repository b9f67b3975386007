//! Backends that never leave the process.
//!
//! Used by the CLI's dry-run mode and throughout the tests.

use super::{ExecFunction, Query, QueryResult};
use crate::exec_config::ExecConfig;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// What a backend was asked to do in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Query text as seen by the backend.
    pub query_str: String,
    /// Target address of the config at call time.
    pub target_address: Option<String>,
}

/// A backend that records every call and replays scripted results.
///
/// Once the script runs out, every call succeeds.
pub struct MockBackend {
    script: Mutex<VecDeque<QueryResult>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockBackend {
    /// Creates a mock where every call succeeds.
    pub fn new() -> Self {
        Self::with_results(Vec::new())
    }

    /// Creates a mock that returns `results` in order.
    pub fn with_results(results: Vec<QueryResult>) -> Self {
        Self {
            script: Mutex::new(results.into()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Returns the calls made so far, oldest first.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecFunction for MockBackend {
    fn execute(&self, query: &Query, config: &ExecConfig) -> QueryResult {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Invocation {
                query_str: query.query_str.clone(),
                target_address: config.target_address().map(String::from),
            });

        if let Some(hook) = config.plugin_hook() {
            hook.before_query(query);
        }
        let result = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| QueryResult::success(Duration::from_millis(1)));
        if let Some(hook) = config.plugin_hook() {
            hook.after_query(query, &result);
        }
        result
    }
}

/// A backend where every call fails with the same error.
pub struct FailingBackend {
    error: String,
}

impl FailingBackend {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl ExecFunction for FailingBackend {
    fn execute(&self, query: &Query, config: &ExecConfig) -> QueryResult {
        let result = QueryResult::failure(self.error.clone());
        if let Some(hook) = config.plugin_hook() {
            hook.before_query(query);
            hook.after_query(query, &result);
        }
        result
    }
}

/// A backend that succeeds without contacting anything.
///
/// The single result row describes what would have been run and where.
#[derive(Debug, Default)]
pub struct DryRunBackend;

impl ExecFunction for DryRunBackend {
    fn execute(&self, query: &Query, config: &ExecConfig) -> QueryResult {
        let start = Instant::now();
        if let Some(hook) = config.plugin_hook() {
            hook.before_query(query);
        }

        debug!(
            target_address = config.target_address().unwrap_or("-"),
            "Dry run of {}",
            query
        );
        let row = format!("{} -> {}", query.query_str, config.display_string());
        let result = QueryResult::success(start.elapsed()).with_data(vec![row]);

        if let Some(hook) = config.plugin_hook() {
            hook.after_query(query, &result);
        }
        result
    }
}
