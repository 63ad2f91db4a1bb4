use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::UserId;

pub struct AddItemParams {
    pub user_id: UserId,
    pub product_id: String,
    pub quantity: i32,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<(), CartError>;
}
