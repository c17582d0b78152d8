//! In-process `Database` double that records every call.

use mig_core::TableRef;
use mig_db::{Database, DbError, DbResult};
use std::cell::RefCell;

#[derive(Default)]
pub(crate) struct RecordingDatabase {
    calls: RefCell<Vec<String>>,
    fail_statement: Option<String>,
    fail_commit: bool,
    fail_rollback: bool,
    fail_schema: bool,
    tables: Vec<(TableRef, String)>,
}

impl RecordingDatabase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_on(statement: &str) -> Self {
        Self {
            fail_statement: Some(statement.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn failing_commit() -> Self {
        Self {
            fail_commit: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing_commit_and_rollback() -> Self {
        Self {
            fail_commit: true,
            fail_rollback: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing_schema() -> Self {
        Self {
            fail_schema: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_table(mut self, name: &str, definition: &str) -> Self {
        self.tables
            .push((TableRef::in_default_schema(name), definition.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl Database for RecordingDatabase {
    fn begin(&self) -> DbResult<()> {
        self.record("BEGIN");
        Ok(())
    }

    fn commit(&self) -> DbResult<()> {
        if self.fail_commit {
            return Err(DbError::TransactionError("COMMIT failed".to_string()));
        }
        self.record("COMMIT");
        Ok(())
    }

    fn rollback(&self) -> DbResult<()> {
        if self.fail_rollback {
            return Err(DbError::TransactionError("ROLLBACK failed".to_string()));
        }
        self.record("ROLLBACK");
        Ok(())
    }

    fn execute(&self, sql: &str) -> DbResult<()> {
        if self.fail_statement.as_deref() == Some(sql) {
            return Err(DbError::ExecutionError(format!("boom: {sql}")));
        }
        self.record(sql);
        Ok(())
    }

    fn list_tables(&self) -> DbResult<Vec<TableRef>> {
        if self.fail_schema {
            return Err(DbError::ExecutionError("catalog unavailable".to_string()));
        }
        Ok(self.tables.iter().map(|(table, _)| table.clone()).collect())
    }

    fn table_definition(&self, table: &TableRef) -> DbResult<String> {
        self.tables
            .iter()
            .find(|(known, _)| known == table)
            .map(|(_, definition)| definition.clone())
            .ok_or_else(|| DbError::TableNotFound(table.to_string()))
    }

    fn relation_exists(&self, name: &str) -> DbResult<bool> {
        Ok(self.tables.iter().any(|(table, _)| table.name == name))
    }
}
