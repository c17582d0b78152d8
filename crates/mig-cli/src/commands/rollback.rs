//! Rollback command implementation - reverts the most recent migration

use anyhow::{Context, Result};
use mig_engine::RollbackReport;

use crate::cli::GlobalArgs;
use crate::commands::describe_marker;
use crate::context::CommandContext;

/// Execute the rollback command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let db = ctx.connect()?;

    let report = ctx.migrator().rollback(&db).context("Rollback failed")?;

    if let Some(file) = &report.reverted {
        println!("Rollback {}", file.path.display());
    }
    println!("{}", announce_target(&report));
    Ok(())
}

/// Resulting version line, printed whether or not a file was reverted.
fn announce_target(report: &RollbackReport) -> String {
    format!("Rollback to {}", describe_marker(report.to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_core::{Marker, Version};

    #[test]
    fn test_noop_rollback_still_announces_target() {
        let report = RollbackReport {
            from: Marker::Baseline,
            to: Marker::Baseline,
            reverted: None,
        };
        assert_eq!(announce_target(&report), "Rollback to 0 (baseline)");
    }

    #[test]
    fn test_rollback_announces_new_version() {
        let report = RollbackReport {
            from: Marker::Applied(Version::new(2).unwrap()),
            to: Marker::Applied(Version::new(1).unwrap()),
            reverted: None,
        };
        assert_eq!(announce_target(&report), "Rollback to 1");
    }
}
