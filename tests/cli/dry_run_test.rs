//! Runs the `query-harness` binary in dry-run mode.

use std::path::Path;
use std::process::Command;

/// Runs the binary inside `config_dir` with an isolated config file.
fn run_harness(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_query-harness"))
        .current_dir(config_dir)
        .arg("--config")
        .arg(config_dir.join("config.toml"))
        .args(args)
        .env_remove("IMPALA_HOME")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute query-harness");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_dry_run_prints_result_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_harness(
        dir.path(),
        &[
            "-b",
            "beeswax",
            "-a",
            "impalad-9:21000",
            "-o",
            "mem_limit:1g",
            "--plan-first",
            "SELECT 1",
        ],
    );

    assert_eq!(code, 0, "Expected exit code 0");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(
        json["data"][0],
        "SELECT 1 -> impala-beeswax @ impalad-9:21000 (1 options)"
    );
}

#[test]
fn test_print_jdbc_command() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_harness(
        dir.path(),
        &[
            "-b",
            "jdbc",
            "--impala-home",
            "/opt/impala",
            "--transport",
            "NOSASL",
            "--print-jdbc-command",
        ],
    );

    assert_eq!(code, 0, "Expected exit code 0");
    assert_eq!(
        stdout.trim(),
        "/opt/impala/bin/run-jdbc-client.sh -i \"localhost:21050\" -t NOSASL"
    );
}

#[test]
fn test_jdbc_without_impala_home_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_harness(dir.path(), &["-b", "jdbc", "SELECT 1"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("IMPALA_HOME"), "stderr was: {stderr}");
}

#[test]
fn test_malformed_options_fail_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) =
        run_harness(dir.path(), &["-b", "hs2", "-o", "mem_limit", "SELECT 1"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Malformed options"), "stderr was: {stderr}");
}

#[test]
fn test_config_file_supplies_backend() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "backend = \"hive\"\nexec_options = \"Hive.Exec.Parallel:true\"\n",
    )
    .unwrap();

    let (code, stdout, _) = run_harness(dir.path(), &["-a", "hs2-host:10000", "SELECT 2"]);

    assert_eq!(code, 0, "Expected exit code 0");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["data"][0], "SELECT 2 -> hive-hs2 @ hs2-host:10000 (1 options)");
}

#[test]
fn test_impala_home_from_dotenv_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "IMPALA_HOME=/opt/impala-dotenv\n").unwrap();

    let (code, stdout, stderr) = run_harness(
        dir.path(),
        &["-b", "jdbc", "--transport", "PLAIN", "--print-jdbc-command"],
    );

    assert_eq!(code, 0, "stderr was: {stderr}");
    assert_eq!(
        stdout.trim(),
        "/opt/impala-dotenv/bin/run-jdbc-client.sh -i \"localhost:21050\" -t PLAIN"
    );
}
