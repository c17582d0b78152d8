//! Schema command implementation - rewrites the schema snapshot

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::context::CommandContext;

/// Execute the schema command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let db = ctx.connect()?;
    let migrator = ctx.migrator();

    migrator
        .refresh_schema(&db)
        .context("Failed to refresh schema snapshot")?;
    println!("Wrote {}", migrator.snapshot().path().display());
    Ok(())
}
