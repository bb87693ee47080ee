//! `seed-database` command.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::CliResult;
use nutrifit_db::{seed, Database, SeedPlan};

/// Seeds demo data and prints the summary.
pub async fn seed_database<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    plan: SeedPlan,
) -> CliResult<()> {
    let summary = seed(db, plan).await?;
    console.say(summary)
}
