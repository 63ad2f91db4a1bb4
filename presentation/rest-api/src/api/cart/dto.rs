use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct CartItemDto {
    /// Product identifier
    pub product_id: String,
    /// Units of the product (0 or more)
    pub quantity: i32,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct AddItemRequest {
    /// Owner of the cart
    pub user_id: String,
    /// Item to merge into the cart
    pub item: CartItemDto,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct CartResponse {
    pub user_id: String,
    /// One entry per product; empty for an unknown or emptied cart
    pub items: Vec<CartItemDto>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            user_id: cart.user_id.to_string(),
            items: cart.items.into_iter().map(Into::into).collect(),
        }
    }
}
