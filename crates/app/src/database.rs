//! Database connection management

use std::str::FromStr;

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the transaction fails to start.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Build a pool for `database_name` on the server at `database_url`.
///
/// No connection is opened until the pool is first used.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect(database_url: &str, database_name: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.database(database_name);

    Ok(PgPoolOptions::new().connect_lazy_with(options))
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Convert a SQL `COUNT(*)` into an unsigned count.
pub(crate) fn decode_count(column: &str, count: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_count_rejects_negative() {
        assert!(decode_count("count", -1).is_err());
    }

    #[test]
    fn decode_count_accepts_zero() -> Result<(), sqlx::Error> {
        assert_eq!(decode_count("count", 0)?, 0);

        Ok(())
    }

    #[test]
    fn connect_rejects_malformed_url() {
        assert!(connect("not a url", "thunder_services").is_err());
    }
}
