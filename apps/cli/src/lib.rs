//! # nutrifit-cli
//!
//! Command-line front end for the NutriFit store.
//!
//! ## Module Organization
//! ```text
//! nutrifit_cli/
//! ├── lib.rs          ◄─── You are here (startup, logging, exit policy)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── Layered configuration
//! ├── console.rs      ◄─── Prompting and output over any BufRead/Write
//! ├── error.rs        ◄─── CliError + recoverable/unrecoverable policy
//! ├── commands/       ◄─── One handler per operation
//! └── interactive/    ◄─── Menu session over the core state machine
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments (main.rs)
//! 2. Load configuration (`--config`, `nutrifit.toml`, `NUTRIFIT_*`, `--db`)
//! 3. Initialize tracing to stderr
//! 4. Open the database once and run migrations
//! 5. Dispatch the command (interactive menus when none is given)
//! 6. Close the database and map the outcome to an exit code

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod interactive;

use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::{AppConfig, DEFAULT_LOG_LEVEL};
use console::Console;
use nutrifit_db::{Database, DbConfig};

/// Runs one invocation of the CLI.
///
/// ## Exit Policy
/// - `Ok(SUCCESS)` - command completed
/// - `Ok(FAILURE)` - recoverable error, message already printed
/// - `Err(_)` - anything else; `main` prints the chain and exits 1
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<ExitCode> {
    info!(path = %config.database_path.display(), "Opening database");

    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .with_context(|| {
            format!(
                "could not open database at {}",
                config.database_path.display()
            )
        })?;

    let mut console = Console::stdio();
    let command = cli.command.unwrap_or(Command::Menu);

    let result = commands::dispatch(command, &db, &mut console).await;
    db.close().await;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_recoverable() => {
            console.say(format!("Error: {err}"))?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nutrifit_db=debug` - Repository calls only
/// - Otherwise: the configured `log_level` (default: warn)
///
/// Logs go to stderr so they never interleave with menu output.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
