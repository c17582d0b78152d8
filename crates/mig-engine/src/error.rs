//! Error types for the migration engine.
//!
//! Every variant is fatal to the current invocation. Files committed
//! before the failure stay committed and the version marker points at the
//! last of them.

use mig_core::{CoreError, Version};
use mig_db::DbError;
use thiserror::Error;

/// Migration engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A statement in a migration batch failed; the batch was rolled back (X001).
    #[error("[X001] Migration {file} failed; error sql is:\n  {statement}\n{cause}")]
    Statement {
        file: String,
        statement: String,
        cause: DbError,
    },

    /// BEGIN or COMMIT for a batch failed (X002).
    #[error("[X002] Transaction for migration {file} failed: {cause}")]
    Transaction { file: String, cause: DbError },

    /// The marker names a version with no down file to undo it (X003).
    #[error("[X003] No down migration for version {version} in {dir}")]
    MissingDownFile { version: Version, dir: String },

    /// Reading the live schema failed (X004).
    #[error("[X004] Schema snapshot failed: {0}")]
    Snapshot(DbError),

    /// Writing the snapshot file failed (X005).
    #[error("[X005] Failed to write schema snapshot {path}: {source}")]
    SnapshotWrite {
        path: String,
        source: std::io::Error,
    },

    /// Configuration, discovery, or version store error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
