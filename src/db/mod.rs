//! Database module: connection pool, schema, and row serialization.
//!
//! Layout:
//! - `sqlite.rs`: `TableStore` around the shared pool (connect, init, fetch)
//! - `schema.rs`: SQL DDL for the exposed tables (SQLite-first)
//! - `rows.rs`: pure result-set-to-JSON conversion

pub mod rows;
pub mod schema;
pub mod sqlite;

pub use rows::serialize_rows;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TableStore};
