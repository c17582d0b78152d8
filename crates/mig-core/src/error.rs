//! Error types for mig-core

use thiserror::Error;

/// Core error type for mig
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Unknown target name
    #[error("[E003] Unknown target '{name}'. Available targets: {available}")]
    UnknownTarget { name: String, available: String },

    /// E004: Version marker content could not be parsed
    #[error("[E004] Invalid version marker in {path}: '{content}'")]
    InvalidMarker { path: String, content: String },

    /// E005: Migration file name does not follow `<version>_<label>.sql`
    #[error("[E005] Invalid migration file name '{name}': expected <version>_<label>.sql")]
    InvalidMigrationName { name: String },

    /// E006: Two migration files in one direction share a version
    #[error("[E006] Duplicate migration version {version} in {dir}: '{first}' and '{second}'")]
    DuplicateVersion {
        version: String,
        dir: String,
        first: String,
        second: String,
    },

    /// E007: Migration label rejected
    #[error("[E007] Invalid migration label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// E008: Migration file already exists
    #[error("[E008] Migration file already exists: {path}")]
    MigrationExists { path: String },

    /// E009: IO error
    #[error("[E009] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E010: IO error with file path context
    #[error("[E010] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E011: YAML parse error
    #[error("[E011] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

impl CoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
