//! Locating and invoking the Impala JDBC client script.

use crate::error::{HarnessError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the Impala installation root.
pub const IMPALA_HOME_VAR: &str = "IMPALA_HOME";

/// Location of the client script relative to the installation root.
pub const JDBC_CLIENT_SCRIPT: &str = "bin/run-jdbc-client.sh";

/// Returns the client script path under the given installation root.
pub fn jdbc_client_path(impala_home: &Path) -> PathBuf {
    impala_home.join(JDBC_CLIENT_SCRIPT)
}

/// Resolves the client script path from `IMPALA_HOME`.
pub fn jdbc_client_path_from_env() -> Result<PathBuf> {
    match std::env::var_os(IMPALA_HOME_VAR) {
        Some(home) if !home.is_empty() => Ok(jdbc_client_path(Path::new(&home))),
        _ => Err(HarnessError::config(format!(
            "{IMPALA_HOME_VAR} is not set; it is required to locate {JDBC_CLIENT_SCRIPT}"
        ))),
    }
}

/// Builds the command line that runs the JDBC client against `address`.
///
/// Fails if no transport has been chosen.
pub fn jdbc_client_cmd(client_path: &Path, address: &str, transport: Option<&str>) -> Result<String> {
    let transport = transport.ok_or_else(|| {
        HarnessError::precondition("transport must be set to build the JDBC client command")
    })?;
    Ok(format!(
        "{} -i \"{}\" -t {}",
        client_path.display(),
        address,
        transport
    ))
}
