use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;

pub struct AddItemUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Adding item: user_id={}, product_id={}, quantity={}",
            params.user_id, params.product_id, params.quantity
        ));

        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }
        let item = CartItem::new(params.product_id, params.quantity)?;

        if let Err(err) = self
            .store
            .add_item(&params.user_id, &item.product_id, item.quantity)
            .await
        {
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

    fn params(user_id: &str, product_id: &str, quantity: i32) -> AddItemParams {
        AddItemParams {
            user_id: UserId::new(user_id),
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_forward_item_to_store() {
        let mut store = MockStore::new();
        store
            .expect_add_item()
            .with(eq(UserId::new("u1")), eq("shoes"), eq(2))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = AddItemUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("u1", "shoes", 2)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_user_without_touching_store() {
        let use_case = AddItemUseCaseImpl {
            store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(" ", "shoes", 2)).await;

        assert!(matches!(result.unwrap_err(), CartError::UserIdEmpty));
    }

    #[tokio::test]
    async fn should_reject_blank_product() {
        let use_case = AddItemUseCaseImpl {
            store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("u1", "", 2)).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductIdEmpty));
    }

    #[tokio::test]
    async fn should_reject_negative_quantity() {
        let use_case = AddItemUseCaseImpl {
            store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("u1", "shoes", -3)).await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_propagate_storage_unavailable() {
        let mut store = MockStore::new();
        store
            .expect_add_item()
            .returning(|_, _, _| Err(StoreError::storage_unavailable("connection reset")));

        let use_case = AddItemUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("u1", "shoes", 1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Store(StoreError::StorageUnavailable(_))
        ));
    }
}
