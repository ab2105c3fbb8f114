//! Runs the compiled binary end to end.

use std::process::{Command, Output};

const CONFIG_VARS: [&str; 13] = [
    "API_KEY",
    "API_BASE_URL",
    "DATA_SOURCE",
    "CACHE_ENABLED",
    "CACHE_TTL",
    "ANALYSIS_WINDOW",
    "MIN_CONFIDENCE_SCORE",
    "MAX_PORTFOLIO_CONCENTRATION",
    "MAX_SECTOR_ALLOCATION",
    "LOG_LEVEL",
    "LOG_FILE",
    "DATABASE_URL",
    "AGENT_HISTORY_LIMIT",
];

fn advisor(envs: &[(&str, &str)]) -> Output {
    run(Some("info"), envs)
}

/// Runs with `RUST_LOG` unset so `LOG_LEVEL` drives the filter.
fn advisor_without_rust_log(envs: &[(&str, &str)]) -> Output {
    run(None, envs)
}

fn run(rust_log: Option<&str>, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_advisor-cli"));
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    match rust_log {
        Some(directives) => cmd.env("RUST_LOG", directives),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.envs(envs.iter().copied());
    cmd.output().expect("failed to run advisor-cli")
}

#[test]
fn sample_run_prints_report_and_succeeds() {
    let output = advisor(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.status.code(), Some(0));

    assert!(stdout.contains("AI Investment Advisory System"));
    assert!(stdout.contains("  GOOGL: 30 shares @ $28,000.00"));
    assert!(stdout.contains("  CASH: $10,000.00"));
    assert!(stdout.contains("Total Portfolio Value: $110,000.00"));
    assert!(stdout.contains("Starting portfolio advisory workflow"));
    assert!(stdout.contains("  - INCREASE AAPL by 5%"));
    assert!(stdout.contains("  - DECREASE XYZ by 3%"));
    assert!(stdout.contains("  - Move $10,000.00 from TECH to FINANCE"));
    assert!(stdout.contains("  - EQUITY: 60.0%"));
    assert!(stdout.contains("Workflow Completed Successfully"));

    let total = stdout.find("Total Portfolio Value").unwrap();
    let adjustments = stdout.find("Suggested Adjustments").unwrap();
    assert!(total < adjustments);
}

#[test]
fn empty_credentials_only_warn() {
    let output = advisor(&[("API_KEY", "")]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("API_KEY is not configured"));
    assert!(stdout.contains("Workflow Completed Successfully"));
}

#[test]
fn quiet_log_levels_keep_warning_and_progress() {
    for level in ["INFO", "WARNING", "ERROR", "CRITICAL", "bogus"] {
        let output = advisor_without_rust_log(&[("LOG_LEVEL", level), ("API_KEY", "")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "LOG_LEVEL={level}");
        assert!(stdout.contains("API_KEY is not configured"), "LOG_LEVEL={level}: {stdout}");
        assert!(
            stdout.contains("Starting portfolio advisory workflow"),
            "LOG_LEVEL={level}: {stdout}"
        );
        assert!(stdout.contains("Portfolio advisory workflow completed"), "LOG_LEVEL={level}: {stdout}");
        assert!(stdout.contains("Workflow Completed Successfully"));
    }
}

#[test]
fn malformed_config_exits_with_error() {
    let output = advisor(&[("CACHE_TTL", "an hour")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error: Invalid configuration: CACHE_TTL"));
}
