//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use duckdb::{params, Connection};
use mig_core::sql_utils::{TableRef, DEFAULT_SCHEMA};
use std::path::Path;

const LIST_TABLES_SQL: &str = "SELECT schema_name, table_name FROM duckdb_tables() \
     WHERE database_name = current_database() AND NOT internal AND NOT temporary \
     ORDER BY schema_name, table_name";

const TABLE_DEFINITION_SQL: &str = "SELECT sql FROM duckdb_tables() \
     WHERE database_name = current_database() AND schema_name = ? AND table_name = ?";

const RELATION_EXISTS_SQL: &str = "SELECT COUNT(*) FROM information_schema.tables \
     WHERE table_schema = ? AND table_name = ?";

/// DuckDB database backend
///
/// Single-threaded: the connection is owned directly, no `Mutex`.
pub struct DuckDbBackend {
    conn: Connection,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn transaction_control(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::TransactionError(format!("{sql} failed: {e}")))
    }
}

impl Database for DuckDbBackend {
    fn begin(&self) -> DbResult<()> {
        self.transaction_control("BEGIN TRANSACTION")
    }

    fn commit(&self) -> DbResult<()> {
        self.transaction_control("COMMIT")
    }

    fn rollback(&self) -> DbResult<()> {
        self.transaction_control("ROLLBACK")
    }

    fn execute(&self, sql: &str) -> DbResult<()> {
        log::debug!("Executing: {}", sql);
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn list_tables(&self) -> DbResult<Vec<TableRef>> {
        let mut stmt = self.conn.prepare(LIST_TABLES_SQL)?;
        let tables = stmt
            .query_map([], |row| {
                let schema: String = row.get(0)?;
                let name: String = row.get(1)?;
                Ok(TableRef::new(schema, name))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables)
    }

    fn table_definition(&self, table: &TableRef) -> DbResult<String> {
        let sql: Option<String> = match self.conn.query_row(
            TABLE_DEFINITION_SQL,
            params![table.schema, table.name],
            |row| row.get(0),
        ) {
            Ok(sql) => sql,
            Err(duckdb::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };
        sql.ok_or_else(|| DbError::TableNotFound(table.to_string()))
    }

    fn relation_exists(&self, name: &str) -> DbResult<bool> {
        let count: i64 = self.conn.query_row(
            RELATION_EXISTS_SQL,
            params![DEFAULT_SCHEMA, name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
