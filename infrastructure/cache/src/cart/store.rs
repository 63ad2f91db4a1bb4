use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use tokio::sync::OnceCell;

use business::domain::cart::model::Cart;
use business::domain::cart::store::CartStore;
use business::domain::errors::StoreError;
use business::domain::shared::value_objects::UserId;

use super::record::{self, CART_FIELD};
use crate::config::CacheConfig;

/// Cart store keeping one encoded cart per user in Redis.
///
/// `add_item` reads, merges and writes back the whole record in separate
/// round-trips. Concurrent adds for the same user can overwrite each other;
/// the last write wins.
pub struct CartStoreRedis {
    client: redis::Client,
    config: CacheConfig,
    connection: OnceCell<ConnectionManager>,
}

impl CartStoreRedis {
    pub fn new(config: CacheConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| StoreError::configuration_invalid(format!("redis address: {}", e)))?;

        Ok(Self {
            client,
            config,
            connection: OnceCell::new(),
        })
    }

    /// Returns the shared connection, establishing it on first use.
    ///
    /// Establishing retries with exponential backoff; once connected, commands
    /// are never retried here.
    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                tracing::info!(url = %self.config.url, "Connecting to Redis");
                let manager_config = ConnectionManagerConfig::new()
                    .set_exponent_base(2)
                    .set_factor(self.config.retry_factor_ms)
                    .set_number_of_retries(self.config.connect_retries)
                    .set_connection_timeout(self.config.connection_timeout)
                    .set_response_timeout(self.config.response_timeout);

                ConnectionManager::new_with_config(self.client.clone(), manager_config)
                    .await
                    .inspect_err(|e| tracing::error!(error = %e, "Wasn't able to connect to Redis"))
                    .map_err(StoreError::storage_unavailable)
            })
            .await?;

        Ok(manager.clone())
    }
}

#[async_trait]
impl CartStore for CartStoreRedis {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::storage_unavailable)?;
        tracing::info!(%pong, "Successfully connected to Redis");
        Ok(())
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &str,
        quantity: i32,
    ) -> Result<(), StoreError> {
        tracing::debug!(%user_id, product_id, quantity, "add_item");
        let mut conn = self.connection().await?;

        let current: Option<Vec<u8>> = conn
            .hget(user_id.as_str(), CART_FIELD)
            .await
            .map_err(StoreError::storage_unavailable)?;
        let merged = record::merge_item(user_id, current.as_deref(), product_id, quantity)
            .map_err(StoreError::storage_unavailable)?;

        let _: () = conn
            .hset(user_id.as_str(), CART_FIELD, merged)
            .await
            .map_err(StoreError::storage_unavailable)?;
        Ok(())
    }

    async fn empty_cart(&self, user_id: &UserId) -> Result<(), StoreError> {
        tracing::debug!(%user_id, "empty_cart");
        let mut conn = self.connection().await?;

        let empty = record::encode(&Cart::empty(user_id.clone()));
        let _: () = conn
            .hset(user_id.as_str(), CART_FIELD, empty)
            .await
            .map_err(StoreError::storage_unavailable)?;
        Ok(())
    }

    async fn get_cart(&self, user_id: &UserId) -> Result<Cart, StoreError> {
        tracing::debug!(%user_id, "get_cart");
        let mut conn = self.connection().await?;

        let current: Option<Vec<u8>> = conn
            .hget(user_id.as_str(), CART_FIELD)
            .await
            .map_err(StoreError::storage_unavailable)?;
        record::decode(user_id, current.as_deref()).map_err(StoreError::storage_unavailable)
    }

    async fn ping(&self) -> bool {
        // Never goes through the retrying connect used by the data calls
        match self.connection.get() {
            Some(manager) => {
                let mut conn = manager.clone();
                let probe = async {
                    let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
                    Ok::<_, redis::RedisError>(pong)
                };
                matches!(
                    tokio::time::timeout(self.config.response_timeout, probe).await,
                    Ok(Ok(_))
                )
            }
            None => {
                let probe = async {
                    let mut conn = self.client.get_multiplexed_async_connection().await?;
                    let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
                    Ok::<_, redis::RedisError>(pong)
                };
                let budget = self.config.connection_timeout + self.config.response_timeout;
                matches!(tokio::time::timeout(budget, probe).await, Ok(Ok(_)))
            }
        }
    }
}
