//! Cached cart record: one protobuf-encoded cart per user.

use prost::Message;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::value_objects::UserId;

/// Hash field holding the encoded cart under the user's key.
pub const CART_FIELD: &str = "cart";

#[derive(Clone, PartialEq, Message)]
pub struct CartRecord {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItemRecord>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CartItemRecord {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
}

pub fn encode(cart: &Cart) -> Vec<u8> {
    CartRecord {
        user_id: cart.user_id.to_string(),
        items: cart
            .items
            .iter()
            .map(|item| CartItemRecord {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            })
            .collect(),
    }
    .encode_to_vec()
}

/// Decodes a stored record. A missing record is an empty cart.
///
/// The cart is always attributed to `user_id`, the key it was read under.
pub fn decode(user_id: &UserId, bytes: Option<&[u8]>) -> Result<Cart, prost::DecodeError> {
    let Some(bytes) = bytes else {
        return Ok(Cart::empty(user_id.clone()));
    };

    let record = CartRecord::decode(bytes)?;
    Ok(Cart::from_repository(
        user_id.clone(),
        record
            .items
            .into_iter()
            .map(|item| CartItem::from_repository(item.product_id, item.quantity)),
    ))
}

/// Computes the record to write back after adding an item to `current`.
pub fn merge_item(
    user_id: &UserId,
    current: Option<&[u8]>,
    product_id: &str,
    quantity: i32,
) -> Result<Vec<u8>, prost::DecodeError> {
    let mut cart = decode(user_id, current)?;
    cart.add_item(product_id, quantity);
    Ok(encode(&cart))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("u1")
    }

    #[test]
    fn should_read_missing_record_as_empty_cart() {
        let cart = decode(&user(), None).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.user_id, user());
    }

    #[test]
    fn should_read_zero_length_record_as_empty_cart() {
        let cart = decode(&user(), Some(&[])).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.user_id, user());
    }

    #[test]
    fn should_restore_encoded_items() {
        let mut cart = Cart::empty(user());
        cart.add_item("A", 3);
        cart.add_item("B", 5);

        let restored = decode(&user(), Some(&encode(&cart))).unwrap();

        assert_eq!(restored, cart);
    }

    #[test]
    fn should_reject_corrupt_record() {
        assert!(decode(&user(), Some(&[0xff, 0xff, 0xff])).is_err());
    }

    #[test]
    fn should_increment_existing_item() {
        let first = merge_item(&user(), None, "shoes", 2).unwrap();
        let second = merge_item(&user(), Some(&first), "shoes", 3).unwrap();

        let cart = decode(&user(), Some(&second)).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item("shoes").unwrap().quantity, 5);
    }

    #[test]
    fn should_lose_an_update_when_writers_share_a_snapshot() {
        // Both writers read the same record before either writes back
        let snapshot = merge_item(&user(), None, "A", 1).unwrap();
        let _first_write = merge_item(&user(), Some(&snapshot), "A", 2).unwrap();
        let second_write = merge_item(&user(), Some(&snapshot), "A", 4).unwrap();

        // Last writer wins: the first increment is gone
        let cart = decode(&user(), Some(&second_write)).unwrap();
        assert_eq!(cart.item("A").unwrap().quantity, 5);
    }
}
