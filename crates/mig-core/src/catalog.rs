//! Migration catalog: discovery and ordering of up/down migration files.
//!
//! The catalog only reads the migration directories. Every query re-reads
//! the directory, since migrations are added rarely and a run is short.

use crate::error::{CoreError, CoreResult};
use crate::layout::Layout;
use crate::migration::{Direction, MigrationFile, MIGRATION_EXTENSION};
use crate::version::{Marker, Version};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only view over the `up/` and `down/` migration directories.
#[derive(Debug, Clone)]
pub struct Catalog {
    up_dir: PathBuf,
    down_dir: PathBuf,
}

impl Catalog {
    /// Create a catalog over explicit up and down directories.
    pub fn new(up_dir: impl Into<PathBuf>, down_dir: impl Into<PathBuf>) -> Self {
        Self {
            up_dir: up_dir.into(),
            down_dir: down_dir.into(),
        }
    }

    /// Create a catalog over the directories of a [`Layout`].
    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.up_dir(), layout.down_dir())
    }

    /// Directory holding files of `direction`.
    pub fn dir(&self, direction: Direction) -> &Path {
        match direction {
            Direction::Up => &self.up_dir,
            Direction::Down => &self.down_dir,
        }
    }

    /// All files of `direction`, ascending by version.
    ///
    /// A missing directory yields an empty list. Non-`.sql` entries are
    /// ignored; a `.sql` file with a malformed name or a version shared with
    /// another file is an error.
    pub fn list(&self, direction: Direction) -> CoreResult<Vec<MigrationFile>> {
        let dir = self.dir(direction);
        if !dir.is_dir() {
            log::debug!("Migration directory {} not found, treating as empty", dir.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|e| CoreError::io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| CoreError::io(dir, e))?.path();
            if !path.is_file()
                || path.extension().and_then(|s| s.to_str()) != Some(MIGRATION_EXTENSION)
            {
                continue;
            }
            files.push(MigrationFile::from_path(&path, direction)?);
        }

        files.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.label.cmp(&b.label)));

        if let Some(pair) = files.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(CoreError::DuplicateVersion {
                version: pair[0].version.to_string(),
                dir: dir.display().to_string(),
                first: pair[0].file_name(),
                second: pair[1].file_name(),
            });
        }

        log::debug!("Found {} {} migration(s) in {}", files.len(), direction, dir.display());
        Ok(files)
    }

    /// Up files strictly newer than `after`, ascending.
    pub fn pending_up(&self, after: Marker) -> CoreResult<Vec<MigrationFile>> {
        Ok(self
            .list(Direction::Up)?
            .into_iter()
            .filter(|f| Marker::Applied(f.version) > after)
            .collect())
    }

    /// Rollback target for `before`.
    ///
    /// Scans down files newest first and returns the first version strictly
    /// older than `before`. With fewer than two down files there is no
    /// earlier target and the result is [`Marker::Empty`]; when no down file
    /// is older than `before` the result is [`Marker::Baseline`].
    pub fn previous_version(&self, before: Marker) -> CoreResult<Marker> {
        let downs = self.list(Direction::Down)?;
        if downs.len() < 2 {
            return Ok(Marker::Empty);
        }
        Ok(downs
            .iter()
            .rev()
            .map(|f| Marker::Applied(f.version))
            .find(|m| *m < before)
            .unwrap_or(Marker::Baseline))
    }

    /// The file of `direction` carrying `version`, if present.
    pub fn find(&self, direction: Direction, version: Version) -> CoreResult<Option<MigrationFile>> {
        Ok(self
            .list(direction)?
            .into_iter()
            .find(|f| f.version == version))
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
