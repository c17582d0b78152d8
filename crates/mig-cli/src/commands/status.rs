//! Status command implementation - lists applied and pending migrations

use anyhow::{Context, Result};
use mig_core::{Marker, MigrationFile};
use mig_engine::MigrationStatus;
use serde::Serialize;
use std::path::Path;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::commands::describe_marker;
use crate::context::CommandContext;

/// JSON shape of `mig status --output json`
#[derive(Debug, Serialize)]
struct StatusJson<'a> {
    migrations_path: &'a Path,
    current: Marker,
    up_to_date: bool,
    applied: &'a [MigrationFile],
    pending: &'a [MigrationFile],
}

/// Execute the status command
pub(crate) fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let status = ctx
        .migrator()
        .status()
        .context("Failed to read migration status")?;

    match args.output {
        StatusOutput::Table => print!("{}", render_table(&status)),
        StatusOutput::Json => println!("{}", render_json(ctx.layout.root(), &status)?),
    }
    Ok(())
}

fn render_table(status: &MigrationStatus) -> String {
    let mut out = format!("Current version: {}\n\n", describe_marker(status.current));
    if status.total() == 0 {
        out.push_str("No migrations found\n");
        return out;
    }
    for file in &status.applied {
        out.push_str(&format!("  applied  {}\n", file.file_name()));
    }
    for file in &status.pending {
        out.push_str(&format!("  pending  {}\n", file.file_name()));
    }
    out.push_str(&format!(
        "\n{} applied, {} pending\n",
        status.applied.len(),
        status.pending.len()
    ));
    out
}

fn render_json(root: &Path, status: &MigrationStatus) -> Result<String> {
    let view = StatusJson {
        migrations_path: root,
        current: status.current,
        up_to_date: status.is_up_to_date(),
        applied: &status.applied,
        pending: &status.pending,
    };
    serde_json::to_string_pretty(&view).context("Failed to serialize status to JSON")
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
