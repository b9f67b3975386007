//! query-harness - run one query through the execution harness.

use anyhow::Context;
use query_harness::backend::{DryRunBackend, Query};
use query_harness::cli::Cli;
use query_harness::config::Config;
use query_harness::error::HarnessError;
use query_harness::logging;
use query_harness::query::QueryExecutor;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<HarnessError>() {
            Some(harness_err) => error!("{}: {}", harness_err.category(), harness_err),
            None => error!("{:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Precedence: CLI arguments, then config file, then environment.
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    config.merge(&cli.to_config());
    // A .env file may supply IMPALA_HOME; real environment variables win.
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from: {}", path.display());
    }
    config.apply_env_defaults();

    let exec_config = config.to_exec_config()?;
    info!("Execution config: {}", exec_config.display_string());

    if cli.print_jdbc_command {
        println!("{}", exec_config.jdbc_client_cmd()?);
        return Ok(());
    }

    let query_str = cli
        .query
        .clone()
        .context("a query is required unless --print-jdbc-command is given")?;
    let query = Query::new(cli.name.clone(), query_str);

    let mut executor = QueryExecutor::new(
        exec_config.family().as_str(),
        query,
        DryRunBackend,
        exec_config,
        config.error_policy(),
    );
    executor.execute(config.plan_first())?;

    if let Some(result) = executor.result() {
        let json =
            serde_json::to_string_pretty(result).context("Failed to serialize query result")?;
        println!("{json}");
    }

    Ok(())
}
