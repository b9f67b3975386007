//! Run configuration for the harness.
//!
//! Loads executor settings from a TOML file. Every field is optional so a
//! file can hold shared defaults and the command line fills in the rest.

use crate::error::{HarnessError, Result};
use crate::exec_config::{BackendFamily, ExecConfig, IMPALA_HOME_VAR};
use crate::query::ErrorPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for building one execution config and executor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Backend family (e.g. "beeswax", "hs2", "jdbc", "hive").
    pub backend: Option<BackendFamily>,

    /// Address of the serving endpoint, `host:port`.
    pub target_address: Option<String>,

    /// Execution options, formatted as `opt1:val1;opt2:val2`.
    pub exec_options: Option<String>,

    /// Request Kerberos authentication.
    pub use_kerberos: Option<bool>,

    /// JDBC transport.
    pub transport: Option<String>,

    /// User to connect as (HiveServer2).
    pub user: Option<String>,

    /// Impala installation root, used to find the JDBC client.
    pub impala_home: Option<PathBuf>,

    /// EXPLAIN the query before the timed run.
    pub plan_first: Option<bool>,

    /// Stop at the first failed query.
    pub exit_on_error: Option<bool>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("query-harness")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            HarnessError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Merges another config into this one, with the other taking precedence.
    pub fn merge(&mut self, other: &Config) {
        if other.backend.is_some() {
            self.backend = other.backend;
        }
        if other.target_address.is_some() {
            self.target_address = other.target_address.clone();
        }
        if other.exec_options.is_some() {
            self.exec_options = other.exec_options.clone();
        }
        if other.use_kerberos.is_some() {
            self.use_kerberos = other.use_kerberos;
        }
        if other.transport.is_some() {
            self.transport = other.transport.clone();
        }
        if other.user.is_some() {
            self.user = other.user.clone();
        }
        if other.impala_home.is_some() {
            self.impala_home = other.impala_home.clone();
        }
        if other.plan_first.is_some() {
            self.plan_first = other.plan_first;
        }
        if other.exit_on_error.is_some() {
            self.exit_on_error = other.exit_on_error;
        }
    }

    /// Fills `impala_home` from the `IMPALA_HOME` environment variable.
    pub fn apply_env_defaults(&mut self) {
        let from_env = std::env::var_os(IMPALA_HOME_VAR).map(PathBuf::from);
        self.apply_impala_home(from_env);
    }

    fn apply_impala_home(&mut self, home: Option<PathBuf>) {
        if self.impala_home.is_none() {
            self.impala_home = home.filter(|p| !p.as_os_str().is_empty());
        }
    }

    /// Returns the backend family, defaulting to [`BackendFamily::Generic`].
    pub fn family(&self) -> BackendFamily {
        self.backend.unwrap_or_default()
    }

    pub fn plan_first(&self) -> bool {
        self.plan_first.unwrap_or(false)
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::from_exit_on_error(self.exit_on_error.unwrap_or(false))
    }

    /// Builds the execution config these settings describe.
    pub fn to_exec_config(&self) -> Result<ExecConfig> {
        let mut builder =
            ExecConfig::builder(self.family()).use_kerberos(self.use_kerberos.unwrap_or(false));

        if let Some(address) = &self.target_address {
            builder = builder.target_address(address.clone());
        }
        if let Some(options) = &self.exec_options {
            builder = builder.exec_options(options.clone());
        }
        if let Some(transport) = &self.transport {
            builder = builder.transport(transport.clone());
        }
        if let Some(user) = &self.user {
            builder = builder.user(user.clone());
        }
        if let Some(home) = &self.impala_home {
            builder = builder.impala_home(home.clone());
        }

        builder.build()
    }
}
