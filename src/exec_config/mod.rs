//! Execution configs: how a query reaches a backend.
//!
//! A single [`ExecConfig`] type covers every backend family. The family tag
//! selects the default target address and the casing applied to execution
//! option names; everything else is plain data handed to the backend.

mod family;
mod jdbc;
mod options;

pub use family::{BackendFamily, HIVE_SERVER_ADDRESS, IMPALA_BEESWAX_ADDRESS, IMPALA_HS2_ADDRESS};
pub use jdbc::{
    jdbc_client_cmd, jdbc_client_path, jdbc_client_path_from_env, IMPALA_HOME_VAR,
    JDBC_CLIENT_SCRIPT,
};
pub use options::{parse_exec_options, OptionCase};

use crate::error::{HarnessError, Result};
use crate::plugin::PluginHook;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Connection, authentication and option state for one backend.
#[derive(Clone)]
pub struct ExecConfig {
    family: BackendFamily,
    target_address: Option<String>,
    exec_options: HashMap<String, String>,
    use_kerberos: bool,
    plugin_hook: Option<Arc<dyn PluginHook>>,
    transport: Option<String>,
    user: Option<String>,
    jdbc_client_path: Option<PathBuf>,
}

impl ExecConfig {
    /// Starts building a config for the given family.
    pub fn builder(family: BackendFamily) -> ExecConfigBuilder {
        ExecConfigBuilder::new(family)
    }

    /// Creates a config with the family's defaults.
    pub fn new(family: BackendFamily) -> Result<Self> {
        Self::builder(family).build()
    }

    pub fn family(&self) -> BackendFamily {
        self.family
    }

    /// Returns the address the backend should connect to.
    pub fn target_address(&self) -> Option<&str> {
        self.target_address.as_deref()
    }

    /// Rebinds the target address. The value is not validated.
    pub fn set_target_address(&mut self, address: impl Into<String>) {
        self.target_address = Some(address.into());
    }

    /// Returns all execution options with normalized names.
    pub fn exec_options(&self) -> &HashMap<String, String> {
        &self.exec_options
    }

    /// Looks up an option, applying the family's casing to `name` first.
    pub fn exec_option(&self, name: &str) -> Option<&str> {
        let key = self.family.option_case().apply(name);
        self.exec_options.get(&key).map(String::as_str)
    }

    pub fn use_kerberos(&self) -> bool {
        self.use_kerberos
    }

    pub fn plugin_hook(&self) -> Option<&Arc<dyn PluginHook>> {
        self.plugin_hook.as_ref()
    }

    pub fn transport(&self) -> Option<&str> {
        self.transport.as_deref()
    }

    /// Returns the user to connect as (HiveServer2).
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the resolved client script path for JDBC configs.
    pub fn jdbc_client_path(&self) -> Option<&Path> {
        self.jdbc_client_path.as_deref()
    }

    /// Builds the JDBC client command for the current address and transport.
    ///
    /// Computed on every call since the address may be rebound between runs.
    pub fn jdbc_client_cmd(&self) -> Result<String> {
        let client_path = self.jdbc_client_path.as_deref().ok_or_else(|| {
            HarnessError::precondition(format!(
                "{} config has no JDBC client command",
                self.family
            ))
        })?;
        let address = self
            .target_address
            .as_deref()
            .ok_or_else(|| HarnessError::precondition("target address is not set"))?;
        jdbc_client_cmd(client_path, address, self.transport.as_deref())
    }

    /// Returns a short summary for log lines and CLI output.
    pub fn display_string(&self) -> String {
        let target = self.target_address.as_deref().unwrap_or("no target");
        let auth = if self.use_kerberos { ", kerberos" } else { "" };
        format!(
            "{} @ {} ({} options{})",
            self.family,
            target,
            self.exec_options.len(),
            auth
        )
    }
}

impl fmt::Debug for ExecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecConfig")
            .field("family", &self.family)
            .field("target_address", &self.target_address)
            .field("exec_options", &self.exec_options)
            .field("use_kerberos", &self.use_kerberos)
            .field("plugin_hook", &self.plugin_hook.is_some())
            .field("transport", &self.transport)
            .field("user", &self.user)
            .field("jdbc_client_path", &self.jdbc_client_path)
            .finish()
    }
}

/// Builder for [`ExecConfig`]. Every setting is optional.
#[derive(Clone)]
pub struct ExecConfigBuilder {
    family: BackendFamily,
    target_address: Option<String>,
    exec_options: Option<String>,
    use_kerberos: bool,
    plugin_hook: Option<Arc<dyn PluginHook>>,
    transport: Option<String>,
    user: Option<String>,
    impala_home: Option<PathBuf>,
}

impl ExecConfigBuilder {
    fn new(family: BackendFamily) -> Self {
        Self {
            family,
            target_address: None,
            exec_options: None,
            use_kerberos: false,
            plugin_hook: None,
            transport: None,
            user: None,
            impala_home: None,
        }
    }

    /// Overrides the family's default target address.
    pub fn target_address(mut self, address: impl Into<String>) -> Self {
        self.target_address = Some(address.into());
        self
    }

    /// Sets the execution options, formatted as `opt1:val1;opt2:val2`.
    pub fn exec_options(mut self, options: impl Into<String>) -> Self {
        self.exec_options = Some(options.into());
        self
    }

    pub fn use_kerberos(mut self, use_kerberos: bool) -> Self {
        self.use_kerberos = use_kerberos;
        self
    }

    pub fn plugin_hook(mut self, hook: Arc<dyn PluginHook>) -> Self {
        self.plugin_hook = Some(hook);
        self
    }

    /// Sets the JDBC transport (e.g. `NOSASL`, `PLAIN`).
    pub fn transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the Impala installation root instead of reading `IMPALA_HOME`.
    pub fn impala_home(mut self, root: impl Into<PathBuf>) -> Self {
        self.impala_home = Some(root.into());
        self
    }

    /// Parses the options and resolves family defaults.
    ///
    /// Fails on a malformed options string, or for JDBC configs when the
    /// installation root cannot be found.
    pub fn build(self) -> Result<ExecConfig> {
        let family = self.family;
        let exec_options = match self.exec_options.as_deref() {
            Some(raw) => parse_exec_options(raw, family.option_case())?,
            None => HashMap::new(),
        };

        let jdbc_client_path = if family == BackendFamily::ImpalaJdbc {
            Some(match self.impala_home {
                Some(root) => jdbc_client_path(&root),
                None => jdbc_client_path_from_env()?,
            })
        } else {
            if self.transport.is_some() {
                warn!(%family, "Transport is only used by JDBC configs; ignoring it");
            }
            None
        };

        let target_address = self
            .target_address
            .or_else(|| family.default_target_address().map(String::from));

        Ok(ExecConfig {
            family,
            target_address,
            exec_options,
            use_kerberos: self.use_kerberos,
            plugin_hook: self.plugin_hook,
            transport: self.transport,
            user: self.user,
            jdbc_client_path,
        })
    }
}
