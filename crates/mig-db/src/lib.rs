//! mig-db - Database abstraction layer for mig
//!
//! This crate provides the `Database` trait consumed by the migration engine
//! and its DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use self::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
