//! Statement executor: runs one migration file as a single transaction.
//!
//! This is the only place transactions are opened, committed, or aborted.
//! Engines without transactional DDL can still leave partial DDL behind on
//! failure; DuckDB rolls DDL back.

use crate::error::{EngineError, EngineResult};
use mig_core::{MigrationBatch, MigrationFile};
use mig_db::Database;

/// Read `file`, split it into statements, and run them atomically.
///
/// Returns the number of statements executed.
pub fn run_file(db: &dyn Database, file: &MigrationFile) -> EngineResult<usize> {
    let batch = file.load_batch()?;
    run_batch(db, &file.file_name(), &batch)?;
    Ok(batch.len())
}

/// Run `batch` inside `BEGIN` / `COMMIT`, rolling back on the first failing
/// statement. `name` identifies the batch in errors.
pub fn run_batch(db: &dyn Database, name: &str, batch: &MigrationBatch) -> EngineResult<()> {
    db.begin().map_err(|cause| EngineError::Transaction {
        file: name.to_string(),
        cause,
    })?;

    for statement in batch.statements() {
        if let Err(cause) = db.execute(statement) {
            if let Err(rollback_err) = db.rollback() {
                log::warn!("ROLLBACK after failure in {name} also failed: {rollback_err}");
            }
            return Err(EngineError::Statement {
                file: name.to_string(),
                statement: statement.clone(),
                cause,
            });
        }
    }

    if let Err(cause) = db.commit() {
        if let Err(rollback_err) = db.rollback() {
            log::warn!("ROLLBACK after failed COMMIT in {name} also failed: {rollback_err}");
        }
        return Err(EngineError::Transaction {
            file: name.to_string(),
            cause,
        });
    }

    log::debug!("Committed {} statement(s) from {}", batch.len(), name);
    Ok(())
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
