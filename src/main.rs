//! trading-cli - Entry Point
//!
//! Runs one exchange command and exits.
//!
//! Wiring sequence:
//! 1. Load `.env` (credentials) if present
//! 2. Parse arguments; `--info` / `--license` exit early
//! 3. Load config (optional TOML file) + validate
//! 4. Init tracing (stderr, text or JSON)
//! 5. Build the venue adapter, run the use case, print the result

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trading_cli::cli::{Cli, runner};
use trading_cli::config::{LoggingConfig, loader};

#[tokio::main]
async fn main() -> ExitCode {
    // ── 1. Environment ──────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Arguments ────────────────────────────────────────
    let cli = Cli::parse();
    if let Some(code) = runner::handle_global_flags(&cli) {
        return code;
    }

    // ── 3. Configuration ────────────────────────────────────
    let config = match loader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // ── 4. Logging ──────────────────────────────────────────
    init_tracing(&config.logging);

    // ── 5. Run ──────────────────────────────────────────────
    runner::run(cli, &config).await
}

/// Logs go to stderr so tables on stdout stay pipeable. `RUST_LOG` wins
/// over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
