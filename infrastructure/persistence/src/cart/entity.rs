use sqlx::FromRow;

use business::domain::cart::model::CartItem;

/// One product line of a user's cart in the `carts` table.
#[derive(Debug, Clone, FromRow)]
pub struct CartRowEntity {
    pub id: i32,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
}

impl CartRowEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(self.product_id, self.quantity)
    }
}
