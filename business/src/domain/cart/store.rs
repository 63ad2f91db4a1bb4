use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::shared::value_objects::UserId;

use super::model::Cart;

/// Storage port for carts.
///
/// Every backend must behave the same way from the outside: quantities of the
/// same product merge, an absent cart reads as an empty one, and I/O failures
/// surface as [`StoreError::StorageUnavailable`].
#[async_trait]
pub trait CartStore: Send + Sync {
    /// One-time backend setup. Safe to call more than once.
    async fn initialize(&self) -> Result<(), StoreError>;

    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &str,
        quantity: i32,
    ) -> Result<(), StoreError>;

    /// Removes every item of the user. Emptying an empty cart succeeds.
    async fn empty_cart(&self, user_id: &UserId) -> Result<(), StoreError>;

    /// Returns the user's cart, or an empty one if nothing is stored.
    async fn get_cart(&self, user_id: &UserId) -> Result<Cart, StoreError>;

    /// Liveness probe. Never fails; unreachable backends report `false`.
    async fn ping(&self) -> bool;
}
