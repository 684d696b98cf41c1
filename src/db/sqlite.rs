use crate::db::schema::SQLITE_INIT;
use crate::error::GatewayError;
use crate::tables::TableDescriptor;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Shared read-only handle over the connection pool. Cloning is cheap; all
/// handlers and the aggregator share one pool and never mutate state through
/// it.
#[derive(Clone)]
pub struct TableStore {
    pool: SqlitePool,
}

impl TableStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a 5-connection pool against `url`, creating the database file if
    /// it does not exist yet.
    pub async fn connect(url: &str) -> Result<Self, GatewayError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), GatewayError> {
        // execute statement by statement (sqlx::query takes one command)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Connectivity probe: asks the database for its clock.
    pub async fn probe(&self) -> Result<NaiveDateTime, GatewayError> {
        let now: NaiveDateTime = sqlx::query_scalar("SELECT datetime('now')")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    /// Fetch the `limit` most-recent rows for one descriptor. The query text
    /// is built entirely from the code-defined whitelist.
    pub async fn fetch_recent(
        &self,
        desc: &TableDescriptor,
    ) -> Result<Vec<SqliteRow>, GatewayError> {
        let sql = desc.query();
        debug!(table = desc.name, "dispatching read query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!(table = desc.name, rows = rows.len(), "read query resolved");
        Ok(rows)
    }
}
