//! Migrate command implementation - applies pending migrations

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::commands::describe_marker;
use crate::context::CommandContext;

/// Execute the migrate command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let db = ctx.connect()?;
    let migrator = ctx.migrator();

    let report = migrator
        .migrate_with(&db, |file| println!("Migrate {}", file.path.display()))
        .context("Migration failed")?;

    if report.applied.is_empty() {
        println!("No pending migrations");
    }
    println!("Current version is {}", describe_marker(report.version));
    Ok(())
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
