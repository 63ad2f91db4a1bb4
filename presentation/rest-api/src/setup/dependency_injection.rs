use std::sync::Arc;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::check_health::CheckHealthUseCaseImpl;
use business::application::cart::empty_cart::EmptyCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::errors::StoreError;
use business::domain::logger::Logger;

use cache::cart::store::CartStoreRedis;
use logger::TracingLogger;
use memory::cart::store::CartStoreMemory;
use persistence::cart::repository::CartStorePostgres;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::config::store_config::StoreConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    /// Builds the configured store, initializes it and wires the use cases.
    ///
    /// # Errors
    /// Fails when the store can't be built or initialized; the service must
    /// not start in that case.
    pub async fn new(store_config: &StoreConfig) -> anyhow::Result<Self> {
        let store = build_store(store_config)?;
        tracing::info!(store = store_config.name(), "Initializing cart store");
        store.initialize().await?;

        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn CartStore>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let empty_cart_use_case = Arc::new(EmptyCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let check_health_use_case = Arc::new(CheckHealthUseCaseImpl { store, logger });

        Self {
            health_api: HealthApi::new(check_health_use_case),
            cart_api: CartApi::new(add_item_use_case, empty_cart_use_case, get_cart_use_case),
        }
    }
}

/// Constructs the single store backend for this process.
pub fn build_store(config: &StoreConfig) -> Result<Arc<dyn CartStore>, StoreError> {
    let store: Arc<dyn CartStore> = match config {
        StoreConfig::Memory => Arc::new(CartStoreMemory::new()),
        StoreConfig::Cache(cache) => Arc::new(CartStoreRedis::new(cache.clone())?),
        StoreConfig::Relational(db) => Arc::new(CartStorePostgres::from_config(db)?),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cache::config::CacheConfig;

    use super::*;

    #[tokio::test]
    async fn should_start_with_memory_store() {
        assert!(DependencyContainer::new(&StoreConfig::Memory).await.is_ok());
    }

    #[tokio::test]
    async fn should_refuse_to_start_when_store_unreachable() {
        let config = StoreConfig::Cache(CacheConfig {
            connect_retries: 0,
            connection_timeout: Duration::from_millis(500),
            ..CacheConfig::from_address("127.0.0.1:1").unwrap()
        });

        assert!(DependencyContainer::new(&config).await.is_err());
    }
}
