//! mig-engine - Apply, rollback, and schema snapshots for mig
//!
//! Ties the version store and catalog from `mig-core` to a `mig-db`
//! database: runs migration files transactionally, records progress, and
//! keeps the schema snapshot current.

pub mod error;
pub mod executor;
pub mod migrator;
pub mod snapshot;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{EngineError, EngineResult};
pub use executor::{run_batch, run_file};
pub use migrator::Migrator;
pub use snapshot::SchemaSnapshot;
pub use status::{MigrateReport, MigrationStatus, RollbackReport};
