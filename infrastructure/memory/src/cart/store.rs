use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::store::CartStore;
use business::domain::errors::StoreError;
use business::domain::shared::value_objects::UserId;

/// Process-local cart store.
///
/// All mutations take the same write lock, so updates to one user's cart are
/// strictly ordered and none are lost. Nothing survives a restart.
#[derive(Default)]
pub struct CartStoreMemory {
    carts: RwLock<HashMap<UserId, Cart>>,
}

impl CartStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for CartStoreMemory {
    async fn initialize(&self) -> Result<(), StoreError> {
        tracing::info!("Using process-local cart store");
        Ok(())
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &str,
        quantity: i32,
    ) -> Result<(), StoreError> {
        tracing::debug!(%user_id, product_id, quantity, "add_item");

        let mut carts = self.carts.write();
        carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::empty(user_id.clone()))
            .add_item(product_id, quantity);
        Ok(())
    }

    async fn empty_cart(&self, user_id: &UserId) -> Result<(), StoreError> {
        tracing::debug!(%user_id, "empty_cart");

        self.carts.write().remove(user_id);
        Ok(())
    }

    async fn get_cart(&self, user_id: &UserId) -> Result<Cart, StoreError> {
        tracing::debug!(%user_id, "get_cart");

        Ok(self
            .carts
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| Cart::empty(user_id.clone())))
    }

    async fn ping(&self) -> bool {
        true
    }
}
