//! Tests for the `query-harness` binary.

pub mod dry_run_test;
