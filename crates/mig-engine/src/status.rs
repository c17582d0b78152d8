//! Read-only view of the marker against the up files.

use mig_core::{Marker, MigrationFile};
use serde::Serialize;

/// Which up files are applied and which are pending for the current marker.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationStatus {
    pub current: Marker,
    pub applied: Vec<MigrationFile>,
    pub pending: Vec<MigrationFile>,
}

impl MigrationStatus {
    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }

    /// Newest applied up file, if the marker names one that exists.
    pub fn latest_applied(&self) -> Option<&MigrationFile> {
        self.applied.last()
    }

    /// Total number of up files considered.
    pub fn total(&self) -> usize {
        self.applied.len() + self.pending.len()
    }
}

/// Outcome of one apply run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrateReport {
    /// Files committed during this run, in order.
    pub applied: Vec<MigrationFile>,
    /// Marker after the run.
    pub version: Marker,
}

/// Outcome of one rollback step.
#[derive(Debug, Clone, Serialize)]
pub struct RollbackReport {
    pub from: Marker,
    pub to: Marker,
    /// The down file that ran; `None` when there was nothing to undo.
    pub reverted: Option<MigrationFile>,
}

impl RollbackReport {
    pub fn changed(&self) -> bool {
        self.reverted.is_some()
    }
}
