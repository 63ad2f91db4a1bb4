use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Getting cart: user_id={}", params.user_id));

        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }

        let cart = match self.store.get_cart(&params.user_id).await {
            Ok(cart) => cart,
            Err(err) => {
                self.logger.error(&format!(
                    "Can't access cart storage for user {}: {:?}",
                    params.user_id, err
                ));
                return Err(err.into());
            }
        };

        self.logger
            .debug(&format!("Retrieved {} cart items", cart.items.len()));
        Ok(cart)
    }
}
