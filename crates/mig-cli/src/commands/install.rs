//! Install command implementation - scaffolds the migration directory

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::context::CommandContext;

/// Execute the install command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let created = ctx
        .layout
        .install()
        .with_context(|| format!("Failed to install {}", ctx.layout.root().display()))?;

    if created.is_empty() {
        println!("Already installed at {}", ctx.layout.root().display());
        return Ok(());
    }
    for path in &created {
        println!("Created {}", path.display());
    }
    Ok(())
}
