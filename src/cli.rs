//! Command-line argument parsing for the harness.

use crate::config::Config;
use crate::exec_config::BackendFamily;
use clap::Parser;
use std::path::PathBuf;

fn parse_backend(s: &str) -> std::result::Result<BackendFamily, String> {
    BackendFamily::parse(s).ok_or_else(|| {
        format!("Invalid backend: {s}. Expected: generic, impala, beeswax, hs2, jdbc, or hive")
    })
}

/// Run one query through the execution harness.
#[derive(Parser, Debug)]
#[command(name = "query-harness")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQL text to run
    #[arg(value_name = "QUERY", required_unless_present = "print_jdbc_command")]
    pub query: Option<String>,

    /// Name of the query in logs and output
    #[arg(short = 'n', long, value_name = "NAME", default_value = "adhoc")]
    pub name: String,

    /// Backend family (generic, impala, beeswax, hs2, jdbc, hive)
    #[arg(short = 'b', long, value_name = "BACKEND", value_parser = parse_backend)]
    pub backend: Option<BackendFamily>,

    /// Address of the serving endpoint
    #[arg(short = 'a', long, value_name = "HOST:PORT")]
    pub target: Option<String>,

    /// Execution options (e.g. "mem_limit:1g;num_nodes:1")
    #[arg(short = 'o', long, value_name = "OPTIONS")]
    pub exec_options: Option<String>,

    /// Request Kerberos authentication
    #[arg(short = 'k', long)]
    pub kerberos: bool,

    /// JDBC transport (e.g. NOSASL, PLAIN)
    #[arg(long, value_name = "TRANSPORT")]
    pub transport: Option<String>,

    /// User to connect as (HiveServer2)
    #[arg(short = 'U', long, value_name = "USER")]
    pub user: Option<String>,

    /// Impala installation root (defaults to $IMPALA_HOME)
    #[arg(long, value_name = "PATH")]
    pub impala_home: Option<PathBuf>,

    /// EXPLAIN the query before the timed run
    #[arg(long)]
    pub plan_first: bool,

    /// Exit with an error when the query fails
    #[arg(long)]
    pub exit_on_error: bool,

    /// Print the JDBC client command instead of running a query
    #[arg(long)]
    pub print_jdbc_command: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Converts the arguments into config overrides.
    ///
    /// Flags that were not given stay unset so file values survive a merge.
    pub fn to_config(&self) -> Config {
        Config {
            backend: self.backend,
            target_address: self.target.clone(),
            exec_options: self.exec_options.clone(),
            use_kerberos: self.kerberos.then_some(true),
            transport: self.transport.clone(),
            user: self.user.clone(),
            impala_home: self.impala_home.clone(),
            plan_first: self.plan_first.then_some(true),
            exit_on_error: self.exit_on_error.then_some(true),
        }
    }
}
