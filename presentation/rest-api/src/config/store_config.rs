use business::domain::errors::StoreError;
use cache::config::CacheConfig;
use persistence::db::DatabaseConfig;

use super::cli::StoreMode;

/// Backend selected at startup, with its connection settings.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    Cache(CacheConfig),
    Relational(DatabaseConfig),
}

impl StoreConfig {
    /// Resolves the backend from the CLI/env options.
    ///
    /// Without an explicit mode the cache backend is chosen when a Redis
    /// address is present, the process-local one otherwise.
    pub fn resolve(
        mode: Option<StoreMode>,
        redis: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, StoreError> {
        let redis = redis.filter(|address| !address.trim().is_empty());
        let database_url = database_url.filter(|url| !url.trim().is_empty());

        let mode = mode.unwrap_or(if redis.is_some() {
            StoreMode::Cache
        } else {
            StoreMode::Memory
        });

        match mode {
            StoreMode::Memory => Ok(StoreConfig::Memory),
            StoreMode::Cache => {
                let address = redis.ok_or_else(|| {
                    StoreError::configuration_invalid(
                        "cache store requires --redis or REDIS_ADDR",
                    )
                })?;
                Ok(StoreConfig::Cache(CacheConfig::from_address(&address)?))
            }
            StoreMode::Sql => {
                let url = database_url.ok_or_else(|| {
                    StoreError::configuration_invalid(
                        "sql store requires --database-url or DATABASE_URL",
                    )
                })?;
                Ok(StoreConfig::Relational(DatabaseConfig::new(url)))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreConfig::Memory => "memory",
            StoreConfig::Cache(_) => "cache",
            StoreConfig::Relational(_) => "sql",
        }
    }
}
