//! New command implementation - creates an empty up/down migration pair

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, NewArgs};
use crate::context::CommandContext;

/// Execute the new command
pub(crate) fn execute(args: &NewArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let pair = ctx
        .layout
        .new_migration(&args.label)
        .with_context(|| format!("Failed to create migration '{}'", args.label))?;

    println!("Created {}", pair.up.display());
    println!("Created {}", pair.down.display());
    Ok(())
}
