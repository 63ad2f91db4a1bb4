#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.user_id_empty")]
    UserIdEmpty,
    #[error("cart.product_id_empty")]
    ProductIdEmpty,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error(transparent)]
    Store(#[from] crate::domain::errors::StoreError),
}
