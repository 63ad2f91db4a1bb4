use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;

/// A product line in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Result<Self, CartError> {
        let product_id = product_id.into();
        if product_id.trim().is_empty() {
            return Err(CartError::ProductIdEmpty);
        }
        if quantity < 0 {
            return Err(CartError::InvalidQuantity);
        }

        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// Constructor for data already persisted in a store (no validation).
    pub fn from_repository(product_id: String, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A user's cart. Holds at most one item per product.
///
/// A cart that was never written and a cart that was emptied are the same
/// value: a `Cart` with no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
        }
    }

    /// Rebuilds a cart from stored items, folding repeated products together.
    pub fn from_repository(user_id: UserId, items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::empty(user_id);
        for item in items {
            cart.add_item(&item.product_id, item.quantity);
        }
        cart
    }

    /// Merges `quantity` units of `product_id` into the cart.
    ///
    /// Increments the existing entry for the product, or appends a new one.
    pub fn add_item(&mut self, product_id: &str, quantity: i32) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self
                .items
                .push(CartItem::from_repository(product_id.to_string(), quantity)),
        }
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
