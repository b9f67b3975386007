//! Library-level integration tests.

pub mod executor_test;
