//! Extension point invoked by backends around a query run.

use crate::backend::{Query, QueryResult};

/// Hooks a caller can attach to an execution config.
///
/// The harness only stores the hook; backends decide when to call it.
/// The bundled backends call `before_query` right before a run and
/// `after_query` with its result.
pub trait PluginHook: Send + Sync {
    /// Called before the backend runs `query`.
    fn before_query(&self, _query: &Query) {}

    /// Called after the backend produced `result` for `query`.
    fn after_query(&self, _query: &Query, _result: &QueryResult) {}
}
