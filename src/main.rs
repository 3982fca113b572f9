//! Redis Cache smoke test
//!
//! Stores a fixed set of values, reads each one back and prints the outcome.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_cache::{smoke, BackendKind, Cache, Config};

/// Entry point for the smoke test.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to the configured store (flushing it)
/// 4. Run the round-trips and print one line per check
/// 5. Exit non-zero if any check failed
fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the check results.
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(report) => {
            for check in &report.checks {
                println!("{}", check);
            }
            if report.passed() {
                println!("All tests passed!");
                ExitCode::SUCCESS
            } else {
                println!("{} of {} checks failed", report.failures(), report.checks.len());
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("Smoke test aborted: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<smoke::Report> {
    let config = Config::from_env();
    info!(backend = ?config.backend, url = %config.redis_url(), "Configuration loaded");

    let report = match config.backend {
        BackendKind::Redis => {
            let mut cache = Cache::connect(&config)
                .with_context(|| format!("connecting to {}", config.redis_url()))?;
            smoke::run(&mut cache)?
        }
        BackendKind::Memory => {
            let mut cache = Cache::in_memory()?;
            let report = smoke::run(&mut cache)?;
            let stats = cache.backend_mut().stats();
            info!(
                hits = stats.hits,
                misses = stats.misses,
                writes = stats.writes,
                hit_rate = stats.hit_rate(),
                "In-memory store statistics"
            );
            report
        }
    };

    Ok(report)
}
