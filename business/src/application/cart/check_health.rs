use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::check_health::{CheckHealthUseCase, HealthStatus};
use crate::domain::logger::Logger;

pub struct CheckHealthUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckHealthUseCase for CheckHealthUseCaseImpl {
    async fn execute(&self) -> HealthStatus {
        if self.store.ping().await {
            HealthStatus::Serving
        } else {
            self.logger.warn("Cart store did not answer the ping");
            HealthStatus::NotServing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::errors::StoreError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn initialize(&self) -> Result<(), StoreError>;
            async fn add_item(&self, user_id: &UserId, product_id: &str, quantity: i32) -> Result<(), StoreError>;
            async fn empty_cart(&self, user_id: &UserId) -> Result<(), StoreError>;
            async fn get_cart(&self, user_id: &UserId) -> Result<Cart, StoreError>;
            async fn ping(&self) -> bool;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_report_serving_when_store_answers() {
        let mut store = MockStore::new();
        store.expect_ping().returning(|| true);

        let use_case = CheckHealthUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, HealthStatus::Serving);
    }

    #[tokio::test]
    async fn should_report_not_serving_when_store_is_down() {
        let mut store = MockStore::new();
        store.expect_ping().returning(|| false);

        let use_case = CheckHealthUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let status = use_case.execute().await;

        assert_eq!(status, HealthStatus::NotServing);
        assert_eq!(status.to_string(), "NOT_SERVING");
    }
}
