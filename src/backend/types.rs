//! Query and result types exchanged with backend functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A query to be run by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Name of the query within its workload (e.g. `TPCH-Q1`).
    pub name: String,

    /// SQL text handed to the backend.
    pub query_str: String,

    /// Database the query runs in, if any.
    #[serde(default)]
    pub db: Option<String>,
}

impl Query {
    /// Creates a query with the given name and text.
    pub fn new(name: impl Into<String>, query_str: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query_str: query_str.into(),
            db: None,
        }
    }

    /// Sets the database the query runs in.
    pub fn with_db(mut self, db: impl Into<String>) -> Self {
        self.db = Some(db.into());
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.query_str)
    }
}

/// Outcome of a single query run, as reported by a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Whether the backend considers the run successful.
    pub success: bool,

    /// Error text reported by the backend. Empty on success.
    #[serde(default)]
    pub query_error: String,

    /// Time the backend spent on the run.
    #[serde(with = "duration_serde")]
    pub time_taken: Duration,

    /// Result rows rendered as text.
    #[serde(default)]
    pub data: Vec<String>,

    /// Runtime profile, when the backend collects one.
    #[serde(default)]
    pub runtime_profile: Option<String>,
}

impl QueryResult {
    /// Creates a successful result.
    pub fn success(time_taken: Duration) -> Self {
        Self {
            success: true,
            time_taken,
            ..Self::default()
        }
    }

    /// Creates a failed result carrying the backend's error text.
    pub fn failure(query_error: impl Into<String>) -> Self {
        Self {
            success: false,
            query_error: query_error.into(),
            ..Self::default()
        }
    }

    /// Sets the result rows.
    pub fn with_data(mut self, data: Vec<String>) -> Self {
        self.data = data;
        self
    }
}

/// Serde helper for Duration (serialize as nanoseconds).
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // u64 nanoseconds covers about 584 years
        (duration.as_nanos() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}
