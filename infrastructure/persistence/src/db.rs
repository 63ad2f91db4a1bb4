use std::{str::FromStr, time::Duration};

use business::domain::errors::StoreError;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    /// Bounds connecting and waiting for a pooled connection, retries included.
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(2),
        }
    }
}

/// Creates a PostgreSQL connection pool without connecting.
///
/// Connections are opened on first acquisition, so an unreachable database
/// only shows up when a statement runs.
pub fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let options = PgConnectOptions::from_str(&config.connection_string)
        .map_err(|e| StoreError::configuration_invalid(format!("database url: {}", e)))?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}

/// Creates the `carts` table and its user index when missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    let mut conn = pool
        .acquire()
        .await
        .map_err(StoreError::storage_unavailable)?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS carts (
            id SERIAL PRIMARY KEY,
            userid VARCHAR NOT NULL,
            productid VARCHAR NOT NULL,
            quantity INTEGER NOT NULL
        )"#,
    )
    .execute(&mut *conn)
    .await
    .map_err(StoreError::storage_unavailable)?;

    sqlx::query("CREATE INDEX IF NOT EXISTS carts_userid_idx ON carts (userid)")
        .execute(&mut *conn)
        .await
        .map_err(StoreError::storage_unavailable)?;

    Ok(())
}
