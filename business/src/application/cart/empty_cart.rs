use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::empty_cart::{EmptyCartParams, EmptyCartUseCase};
use crate::domain::logger::Logger;

pub struct EmptyCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EmptyCartUseCase for EmptyCartUseCaseImpl {
    async fn execute(&self, params: EmptyCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Emptying cart: user_id={}", params.user_id));

        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }

        if let Err(err) = self.store.empty_cart(&params.user_id).await {
            self.logger.error(&format!(
                "Can't access cart storage for user {}: {:?}",
                params.user_id, err
            ));
            return Err(err.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::errors::StoreError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use mockall::predicate::eq;

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
    async fn should_empty_cart_of_user() {
        let mut store = MockStore::new();
        store
            .expect_empty_cart()
            .with(eq(UserId::new("u1")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = EmptyCartUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EmptyCartParams {
                user_id: UserId::new("u1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_user() {
        let use_case = EmptyCartUseCaseImpl {
            store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EmptyCartParams {
                user_id: UserId::new(""),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::UserIdEmpty));
    }

    #[tokio::test]
    async fn should_propagate_storage_unavailable() {
        let mut store = MockStore::new();
        store
            .expect_empty_cart()
            .returning(|_| Err(StoreError::storage_unavailable("timed out")));

        let use_case = EmptyCartUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EmptyCartParams {
                user_id: UserId::new("u1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Store(StoreError::StorageUnavailable(_))
        ));
    }
}
