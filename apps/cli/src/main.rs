//! # NutriFit CLI Entry Point
//!
//! ```bash
//! nutrifit                          # interactive menus
//! nutrifit view-supplements
//! nutrifit --db demo.db seed-database --reset
//! RUST_LOG=debug nutrifit view-cart
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use nutrifit_cli::cli::Cli;
use nutrifit_cli::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref(), cli.db.as_deref())
        .context("invalid configuration")?;

    nutrifit_cli::init_tracing(&config.log_level);

    nutrifit_cli::run(cli, config).await
}
