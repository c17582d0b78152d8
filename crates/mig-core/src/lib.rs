//! mig-core - Core library for mig
//!
//! This crate provides the version model, migration file discovery and
//! ordering, the version marker store, on-disk layout and scaffolding, and
//! configuration parsing shared by the engine and the CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod migration;
pub mod sql_utils;
pub mod version;
pub mod version_store;

pub use catalog::Catalog;
pub use config::{Config, DatabaseConfig, DbType};
pub use error::{CoreError, CoreResult};
pub use layout::{Layout, NewMigration};
pub use migration::{Direction, MigrationBatch, MigrationFile};
pub use sql_utils::TableRef;
pub use version::{Marker, ParseVersionError, Version};
pub use version_store::{FileVersionStore, MemoryVersionStore, VersionStore};
