//! Migration files and their parsed statement batches.

use crate::error::{CoreError, CoreResult};
use crate::version::Version;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Character separating statements inside a migration file.
pub const STATEMENT_DELIMITER: char = ';';

/// Character separating the version from the label in a file name.
pub const LABEL_SEPARATOR: char = '_';

/// File extension of migration files.
pub const MIGRATION_EXTENSION: &str = "sql";

static FILE_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn file_name_re() -> &'static Regex {
    FILE_NAME_RE.get_or_init(|| Regex::new(r"^(\d+)_(.+)\.sql$").expect("valid regex"))
}

/// Which way a migration file moves the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward schema change
    Up,
    /// Inverse of an up migration
    Down,
}

impl Direction {
    /// Name of the directory holding files of this direction.
    pub fn dir_name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A discovered migration file.
///
/// Up and down files of one logical migration share `version` and `label`
/// and live in sibling directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationFile {
    pub version: Version,
    pub label: String,
    pub direction: Direction,
    pub path: PathBuf,
}

impl MigrationFile {
    /// Build a `MigrationFile` from a path, parsing version and label from
    /// its file name.
    pub fn from_path(path: &Path, direction: Direction) -> CoreResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CoreError::InvalidMigrationName {
                name: path.display().to_string(),
            })?;
        let (version, label) = Self::parse_file_name(name)?;
        Ok(Self {
            version,
            label,
            direction,
            path: path.to_path_buf(),
        })
    }

    /// Split `<version>_<label>.sql` into its parts.
    ///
    /// # Example
    /// - `1000000001_create_users.sql` → (1000000001, "create_users")
    pub fn parse_file_name(name: &str) -> CoreResult<(Version, String)> {
        let invalid = || CoreError::InvalidMigrationName {
            name: name.to_string(),
        };
        let caps = file_name_re().captures(name).ok_or_else(invalid)?;
        let version: Version = caps[1].parse().map_err(|_| invalid())?;
        Ok((version, caps[2].to_string()))
    }

    /// File name for a version/label pair.
    pub fn file_name_for(version: Version, label: &str) -> String {
        format!(
            "{}{LABEL_SEPARATOR}{label}.{MIGRATION_EXTENSION}",
            version.padded()
        )
    }

    /// Base name of the file on disk.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read the file and split it into a statement batch.
    pub fn load_batch(&self) -> CoreResult<MigrationBatch> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| CoreError::io(&self.path, e))?;
        Ok(MigrationBatch::parse(&content))
    }
}

/// Ordered statements of one migration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationBatch {
    statements: Vec<String>,
}

impl MigrationBatch {
    /// Split raw file text on [`STATEMENT_DELIMITER`], trimming each piece
    /// and discarding blanks. Statements may span lines.
    pub fn parse(content: &str) -> Self {
        let statements = content
            .split(STATEMENT_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { statements }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
