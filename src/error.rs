//! Error types for the query harness.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// An execution options string contained a segment that is not `key:value`.
    #[error("Malformed options: {0}")]
    MalformedOptions(String),

    /// A required field was missing when a derived value was requested.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The backend reported a failed query and the executor is fail-fast.
    #[error("Query execution error: {0}")]
    QueryExecution(String),

    /// Configuration errors (invalid config file, unknown backend, missing environment, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HarnessError {
    /// Creates a malformed-options error with the given message.
    pub fn malformed_options(msg: impl Into<String>) -> Self {
        Self::MalformedOptions(msg.into())
    }

    /// Creates a precondition error with the given message.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Creates a query execution error carrying the backend's message.
    pub fn query_execution(msg: impl Into<String>) -> Self {
        Self::QueryExecution(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedOptions(_) => "Options Error",
            Self::Precondition(_) => "Precondition Error",
            Self::QueryExecution(_) => "Query Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using HarnessError.
pub type Result<T> = std::result::Result<T, HarnessError>;
