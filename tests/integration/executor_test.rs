//! Executor integration tests.
//!
//! Drives full prepare/execute lifecycles through the public API.

use query_harness::backend::{ExecFunction, MockBackend, Query, QueryResult};
use query_harness::error::HarnessError;
use query_harness::exec_config::{BackendFamily, ExecConfig};
use query_harness::plugin::PluginHook;
use query_harness::query::{ErrorPolicy, QueryExecutor};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Records what the plugin hook saw, in order.
#[derive(Default)]
struct RecordingHook {
    events: Mutex<Vec<String>>,
}

impl PluginHook for RecordingHook {
    fn before_query(&self, query: &Query) {
        self.events
            .lock()
            .unwrap()
            .push(format!("before {}", query.query_str));
    }

    fn after_query(&self, query: &Query, result: &QueryResult) {
        self.events
            .lock()
            .unwrap()
            .push(format!("after {} success={}", query.query_str, result.success));
    }
}

/// A backend written as a plain function.
fn echo_backend(query: &Query, config: &ExecConfig) -> QueryResult {
    QueryResult::success(Duration::from_millis(3)).with_data(vec![format!(
        "{}@{}",
        query.query_str,
        config.target_address().unwrap_or("-")
    )])
}

#[test]
fn test_function_item_backend() {
    let config = ExecConfig::new(BackendFamily::ImpalaHs2).unwrap();
    let mut executor = QueryExecutor::new(
        "hs2",
        Query::new("q1", "SELECT 1"),
        echo_backend,
        config,
        ErrorPolicy::FailFast,
    );

    executor.prepare("impalad-7:21050");
    executor.execute(false).unwrap();

    assert_eq!(
        executor.result().unwrap().data,
        vec!["SELECT 1@impalad-7:21050"]
    );
}

#[test]
fn test_plan_first_with_plugin_hook() {
    let hook = Arc::new(RecordingHook::default());
    let config = ExecConfig::builder(BackendFamily::ImpalaBeeswax)
        .exec_options("mem_limit:2g")
        .plugin_hook(hook.clone())
        .build()
        .unwrap();
    let mut executor = QueryExecutor::new(
        "beeswax",
        Query::new("q6", "SELECT 6"),
        MockBackend::new(),
        config,
        ErrorPolicy::FailFast,
    );

    executor.execute(true).unwrap();

    assert_eq!(
        *hook.events.lock().unwrap(),
        vec![
            "before EXPLAIN SELECT 6",
            "after EXPLAIN SELECT 6 success=true",
            "before SELECT 6",
            "after SELECT 6 success=true",
        ]
    );
    assert_eq!(executor.query().query_str, "SELECT 6");
}

#[test]
fn test_query_restored_when_planning_fails_and_run_fails() {
    let backend = MockBackend::with_results(vec![
        QueryResult::failure("plan boom"),
        QueryResult::failure("boom"),
    ]);
    let mut executor = QueryExecutor::new(
        "beeswax",
        Query::new("q", "SELECT x FROM t"),
        backend,
        ExecConfig::new(BackendFamily::ImpalaBeeswax).unwrap(),
        ErrorPolicy::FailFast,
    );

    let err = executor.execute(true).unwrap_err();

    assert!(matches!(err, HarnessError::QueryExecution(_)));
    assert!(err.to_string().contains("boom"));
    assert!(!err.to_string().contains("plan boom"));
    assert_eq!(executor.query().query_str, "SELECT x FROM t");
    assert_eq!(executor.result().unwrap().query_error, "boom");
}

#[test]
fn test_continue_policy_keeps_going_across_runs() {
    let backend = MockBackend::with_results(vec![QueryResult::failure("boom")]);
    let mut executor = QueryExecutor::new(
        "hive",
        Query::new("q", "SELECT 1"),
        backend,
        ExecConfig::new(BackendFamily::HiveHs2).unwrap(),
        ErrorPolicy::from_exit_on_error(false),
    );

    executor.execute(false).unwrap();
    assert!(!executor.result().unwrap().success);

    executor.execute(false).unwrap();
    assert!(executor.result().unwrap().success);
}

#[test]
fn test_executors_on_worker_threads_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let mut executor = QueryExecutor::new(
                    "beeswax",
                    Query::new(format!("q{i}"), format!("SELECT {i}")),
                    MockBackend::new(),
                    ExecConfig::new(BackendFamily::ImpalaBeeswax).unwrap(),
                    ErrorPolicy::FailFast,
                );
                executor.prepare(&format!("impalad-{i}:21000"));
                executor.execute(true).unwrap();
                executor.exec_fn().invocations()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let invocations = handle.join().unwrap();
        assert_eq!(invocations.len(), 2);
        for invocation in &invocations {
            assert_eq!(
                invocation.target_address.as_deref(),
                Some(format!("impalad-{i}:21000").as_str())
            );
        }
        assert_eq!(invocations[1].query_str, format!("SELECT {i}"));
    }
}

#[test]
fn test_trait_object_backend() {
    let backend: Box<dyn ExecFunction> = Box::new(MockBackend::new());
    let config = ExecConfig::new(BackendFamily::Generic).unwrap();
    let result = backend.execute(&Query::new("q", "SELECT 1"), &config);
    assert!(result.success);
}
