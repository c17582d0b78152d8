//! Schema snapshot: the CREATE text of every table, written to one file.

use crate::error::{EngineError, EngineResult};
use mig_core::Layout;
use mig_db::Database;
use std::path::{Path, PathBuf};

/// Separator placed between table definitions.
const DEFINITION_SEPARATOR: &str = ";\n\n\n";

/// Writer of the schema snapshot file.
#[derive(Debug, Clone)]
pub struct SchemaSnapshot {
    path: PathBuf,
}

impl SchemaSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.schema_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the snapshot text without touching the file.
    ///
    /// Each definition ends with exactly one `;`, definitions are separated
    /// by two blank lines, and surrounding whitespace is trimmed. A database
    /// with no tables renders as an empty string.
    pub fn render(&self, db: &dyn Database) -> EngineResult<String> {
        let tables = db.list_tables().map_err(EngineError::Snapshot)?;

        let mut out = String::new();
        for table in &tables {
            let definition = db.table_definition(table).map_err(EngineError::Snapshot)?;
            out.push_str(definition.trim().trim_end_matches(';').trim_end());
            out.push_str(DEFINITION_SEPARATOR);
        }

        Ok(out.trim().to_string())
    }

    /// Render the snapshot and overwrite the snapshot file with it.
    pub fn refresh(&self, db: &dyn Database) -> EngineResult<String> {
        let content = self.render(db)?;
        std::fs::write(&self.path, &content).map_err(|source| EngineError::SnapshotWrite {
            path: self.path.display().to_string(),
            source,
        })?;
        log::debug!(
            "Wrote schema snapshot to {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(content)
    }
}
