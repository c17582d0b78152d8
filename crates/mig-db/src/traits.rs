//! Database trait definition

use crate::error::DbResult;
use mig_core::TableRef;

/// The database boundary of the migration engine.
///
/// Calls are blocking and made from a single control thread. Transaction
/// control is exposed as separate calls so the statement executor owns the
/// transaction boundary.
pub trait Database {
    /// Start a transaction
    fn begin(&self) -> DbResult<()>;

    /// Commit the open transaction
    fn commit(&self) -> DbResult<()>;

    /// Abort the open transaction
    fn rollback(&self) -> DbResult<()>;

    /// Execute a single SQL statement
    fn execute(&self, sql: &str) -> DbResult<()>;

    /// Base tables of the current database, ordered by schema then name.
    fn list_tables(&self) -> DbResult<Vec<TableRef>>;

    /// Canonical CREATE TABLE text of one table
    fn table_definition(&self, table: &TableRef) -> DbResult<String>;

    /// Check if a table or view named `name` exists in the default schema
    fn relation_exists(&self, name: &str) -> DbResult<bool>;
}
