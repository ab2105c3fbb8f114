//! Investment Advisor CLI
//!
//! Runs the portfolio advisory workflow on a sample portfolio and prints the
//! report. Takes no arguments; configuration comes from the environment
//! (and `.env`, if present).

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor_core::AdvisorConfig;
use investment_advisor::{report, sample_portfolio, PortfolioTask};

const RULE_WIDTH: usize = 60;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    let config = AdvisorConfig::from_env()?;

    init_tracing(&config)?;

    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    println!("{heavy}");
    println!("AI Investment Advisory System");
    println!("{heavy}");

    config.validate();

    let portfolio = sample_portfolio();
    println!("\nCurrent Portfolio:");
    println!("{}", report::render_portfolio(&portfolio));

    println!("\n{light}");
    println!("Starting Portfolio Advisory Workflow...");
    println!("{light}\n");

    let mut task = PortfolioTask::new(&config);
    let advice = task.execute(&portfolio).await?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(advice = %serde_json::to_string(&advice)?, "Final advice record");
    }

    println!("\n{light}");
    println!("Portfolio Advisory Results");
    println!("{light}");
    print!("{}", report::render_advice(&advice));

    println!("\n{heavy}");
    println!("Workflow Completed Successfully");
    println!("{heavy}");

    Ok(())
}

/// Progress lines go to stdout so they interleave with the report.
/// `RUST_LOG` wins over `LOG_LEVEL`. Under `LOG_LEVEL` the configuration
/// warnings and task progress stay visible however quiet the level is.
fn init_tracing(config: &AdvisorConfig) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => {
            let level = config.log_level_filter();
            EnvFilter::default()
                .add_directive(level.into())
                .add_directive(
                    format!("advisor_core::config={}", level.max(LevelFilter::WARN)).parse()?,
                )
                .add_directive(
                    format!("investment_advisor::tasks={}", level.max(LevelFilter::INFO))
                        .parse()?,
                )
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .without_time()
                .with_target(false),
        )
        .init();

    Ok(())
}
