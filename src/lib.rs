//! query-harness - a backend-agnostic query execution harness.
//!
//! Decouples "run this query and collect a result" from any specific
//! database client protocol. Callers describe the backend with an
//! [`exec_config::ExecConfig`], hand a [`backend::Query`] and an
//! [`backend::ExecFunction`] to a [`query::QueryExecutor`], and read the
//! stored [`backend::QueryResult`] afterwards.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec_config;
pub mod logging;
pub mod plugin;
pub mod query;
