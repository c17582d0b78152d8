//! Apply and rollback state machine.
//!
//! The migrator is the only writer of the version marker. Apply advances the
//! marker after every committed file; rollback moves it back by exactly one
//! step. Both refresh the schema snapshot once the SQL side is done.

use crate::error::{EngineError, EngineResult};
use crate::executor::run_file;
use crate::snapshot::SchemaSnapshot;
use crate::status::{MigrateReport, MigrationStatus, RollbackReport};
use mig_core::{Catalog, Direction, FileVersionStore, Layout, Marker, MigrationFile, VersionStore};
use mig_db::Database;

/// Drives migrations for one catalog, marker store, and snapshot file.
pub struct Migrator<S: VersionStore> {
    catalog: Catalog,
    store: S,
    snapshot: SchemaSnapshot,
}

impl Migrator<FileVersionStore> {
    /// Migrator over the standard on-disk layout.
    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(
            Catalog::from_layout(layout),
            FileVersionStore::new(layout.version_path()),
            SchemaSnapshot::from_layout(layout),
        )
    }
}

impl<S: VersionStore> Migrator<S> {
    pub fn new(catalog: Catalog, store: S, snapshot: SchemaSnapshot) -> Self {
        Self {
            catalog,
            store,
            snapshot,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> &SchemaSnapshot {
        &self.snapshot
    }

    /// Apply every pending up file in version order.
    pub fn migrate(&self, db: &dyn Database) -> EngineResult<MigrateReport> {
        self.migrate_with(db, |_| {})
    }

    /// Like [`Migrator::migrate`], calling `on_applied` after each file is
    /// committed and recorded.
    ///
    /// On a failing file the error is returned at once: earlier files stay
    /// committed, the marker names the last of them, and the snapshot is
    /// not refreshed.
    pub fn migrate_with<F>(&self, db: &dyn Database, mut on_applied: F) -> EngineResult<MigrateReport>
    where
        F: FnMut(&MigrationFile),
    {
        let mut version = self.store.read()?;
        let pending = self.catalog.pending_up(version)?;
        log::debug!("{} pending migration(s) after '{}'", pending.len(), version);

        let mut applied = Vec::with_capacity(pending.len());
        for file in pending {
            let statements = run_file(db, &file)?;

            version = Marker::Applied(file.version);
            self.store.write(version)?;
            log::info!("Applied {} ({} statement(s))", file.file_name(), statements);
            on_applied(&file);
            applied.push(file);
        }

        log::debug!("Apply finished at '{}'", version);
        self.snapshot.refresh(db)?;
        Ok(MigrateReport { applied, version })
    }

    /// Undo the migration named by the marker, moving it back one step.
    ///
    /// Nothing runs when the marker is not ahead of the computed target,
    /// which includes the baseline and empty markers.
    pub fn rollback(&self, db: &dyn Database) -> EngineResult<RollbackReport> {
        let from = self.store.read()?;
        let target = self.catalog.previous_version(from)?;
        log::debug!("Rollback target for '{}' is '{}'", from, target);

        let mut report = RollbackReport {
            from,
            to: from,
            reverted: None,
        };

        match from {
            Marker::Applied(current) if from > target => {
                let down = self
                    .catalog
                    .find(Direction::Down, current)?
                    .ok_or_else(|| EngineError::MissingDownFile {
                        version: current,
                        dir: self.catalog.dir(Direction::Down).display().to_string(),
                    })?;

                run_file(db, &down)?;
                self.store.write(target)?;
                log::info!("Reverted {}, marker now '{}'", down.file_name(), target);

                report.to = target;
                report.reverted = Some(down);
            }
            _ => log::debug!("Marker '{}' is not ahead of '{}', nothing to undo", from, target),
        }

        self.snapshot.refresh(db)?;
        Ok(report)
    }

    /// Compare the marker against the up files without touching anything
    /// but the marker file.
    pub fn status(&self) -> EngineResult<MigrationStatus> {
        let current = self.store.read()?;
        let (applied, pending): (Vec<_>, Vec<_>) = self
            .catalog
            .list(Direction::Up)?
            .into_iter()
            .partition(|f| Marker::Applied(f.version) <= current);
        Ok(MigrationStatus {
            current,
            applied,
            pending,
        })
    }

    /// Rewrite the schema snapshot from the live database.
    pub fn refresh_schema(&self, db: &dyn Database) -> EngineResult<String> {
        self.snapshot.refresh(db)
    }
}

#[cfg(test)]
#[path = "migrator_test.rs"]
mod tests;
