//! On-disk layout of a migrations directory, plus scaffolding.
//!
//! ```text
//! <root>/
//!   up/          forward migrations
//!   down/        matching inverse migrations
//!   version      current version marker
//!   schema.sql   latest schema snapshot
//! ```

use crate::error::{CoreError, CoreResult};
use crate::migration::{Direction, MigrationFile};
use crate::version::Version;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the version marker file.
pub const VERSION_FILE: &str = "version";

/// Name of the schema snapshot file.
pub const SCHEMA_FILE: &str = "schema.sql";

/// Paths of one migrations root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

/// Files created by [`Layout::new_migration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMigration {
    pub version: Version,
    pub up: PathBuf,
    pub down: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn up_dir(&self) -> PathBuf {
        self.root.join(Direction::Up.dir_name())
    }

    pub fn down_dir(&self) -> PathBuf {
        self.root.join(Direction::Down.dir_name())
    }

    pub fn version_path(&self) -> PathBuf {
        self.root.join(VERSION_FILE)
    }

    pub fn schema_path(&self) -> PathBuf {
        self.root.join(SCHEMA_FILE)
    }

    /// Create the directory tree and empty marker/snapshot files.
    ///
    /// Existing files are left as they are, so re-running never resets the
    /// recorded version. Returns the paths that were newly created.
    pub fn install(&self) -> CoreResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [self.root.clone(), self.up_dir(), self.down_dir()] {
            if !dir.is_dir() {
                fs::create_dir_all(&dir).map_err(|e| CoreError::io(&dir, e))?;
                created.push(dir);
            }
        }
        for file in [self.version_path(), self.schema_path()] {
            if !file.exists() {
                fs::write(&file, "").map_err(|e| CoreError::io(&file, e))?;
                created.push(file);
            }
        }
        Ok(created)
    }

    /// Create an empty up/down pair named after the current UTC time.
    pub fn new_migration(&self, label: &str) -> CoreResult<NewMigration> {
        let version = Version::from_timestamp(Utc::now()).ok_or_else(|| {
            CoreError::ConfigInvalid {
                message: "system clock is outside the supported version range".to_string(),
            }
        })?;
        self.new_migration_at(label, version)
    }

    /// Create an empty up/down pair with an explicit version.
    pub fn new_migration_at(&self, label: &str, version: Version) -> CoreResult<NewMigration> {
        validate_label(label)?;

        let name = MigrationFile::file_name_for(version, label);
        let up = self.up_dir().join(&name);
        let down = self.down_dir().join(&name);
        for path in [&up, &down] {
            if path.exists() {
                return Err(CoreError::MigrationExists {
                    path: path.display().to_string(),
                });
            }
        }
        for dir in [self.up_dir(), self.down_dir()] {
            fs::create_dir_all(&dir).map_err(|e| CoreError::io(&dir, e))?;
        }
        fs::write(&up, "").map_err(|e| CoreError::io(&up, e))?;
        fs::write(&down, "").map_err(|e| CoreError::io(&down, e))?;

        log::info!("Created migration pair {}", name);
        Ok(NewMigration { version, up, down })
    }
}

/// Reject labels that would escape the migration directories or produce an
/// unparseable file name.
fn validate_label(label: &str) -> CoreResult<()> {
    let reason = if label.is_empty() {
        Some("must not be empty")
    } else if label.contains('/') || label.contains('\\') || label.contains("..") {
        Some("must not contain '/', '\\', or '..'")
    } else if label.starts_with('.') || label.starts_with('-') {
        Some("must not start with '.' or '-'")
    } else if label.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CoreError::InvalidLabel {
            label: label.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
