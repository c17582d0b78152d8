//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mig_core::{Config, DbType, FileVersionStore, Layout};
use mig_db::DuckDbBackend;
use mig_engine::Migrator;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

const IN_MEMORY: &str = ":memory:";

/// Loaded configuration and resolved paths for one invocation
pub(crate) struct CommandContext {
    pub config: Config,
    pub layout: Layout,
    project_dir: PathBuf,
    target: Option<String>,
    database_override: Option<String>,
}

impl CommandContext {
    /// Load configuration from `--config` or the project directory.
    ///
    /// Without a config file in the project directory the defaults apply.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => Config::load_or_default(&args.project_dir)
                .context("Failed to load project configuration")?,
        };
        let layout = config.layout(&args.project_dir);
        log::debug!("Migrations root: {}", layout.root().display());

        Ok(Self {
            config,
            layout,
            project_dir: args.project_dir.clone(),
            target: args.target.clone(),
            database_override: args.database.clone(),
        })
    }

    pub fn migrator(&self) -> Migrator<FileVersionStore> {
        Migrator::from_layout(&self.layout)
    }

    /// Database path after applying `--database` and `--target`.
    ///
    /// Relative paths resolve against the project directory.
    pub fn database_path(&self) -> Result<String> {
        let raw = match &self.database_override {
            Some(path) => path.clone(),
            None => {
                let db_config = self.config.get_database_config(self.target.as_deref())?;
                match db_config.db_type {
                    DbType::DuckDb => db_config.path,
                }
            }
        };
        Ok(resolve_path(&self.project_dir, &raw))
    }

    /// Open the configured database.
    pub fn connect(&self) -> Result<DuckDbBackend> {
        let path = self.database_path()?;
        log::debug!("Opening database {}", path);
        DuckDbBackend::new(&path).with_context(|| format!("Failed to open database {path}"))
    }
}

fn resolve_path(project_dir: &Path, raw: &str) -> String {
    if raw == IN_MEMORY || Path::new(raw).is_absolute() {
        return raw.to_string();
    }
    project_dir.join(raw).display().to_string()
}
