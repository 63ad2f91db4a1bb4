//! Behaviour every [`CartStore`] backend must share.
//!
//! Adapter crates enable the `contract-tests` feature and run these checks
//! against their store. Each check takes the user id to work on so live
//! backends can be shared between test runs.

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::store::CartStore;
use crate::domain::shared::value_objects::UserId;

fn items(cart: &Cart) -> Vec<(String, i32)> {
    let mut items: Vec<(String, i32)> = cart
        .items
        .iter()
        .map(|CartItem { product_id, quantity }| (product_id.clone(), *quantity))
        .collect();
    items.sort();
    items
}

/// Two adds of one product leave a single entry with the summed quantity.
pub async fn merges_quantities_of_same_product(store: &dyn CartStore, user_id: &UserId) {
    store.empty_cart(user_id).await.expect("empty_cart");

    store.add_item(user_id, "P1", 4).await.expect("add_item");
    store.add_item(user_id, "P1", 7).await.expect("add_item");

    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(items(&cart), vec![("P1".to_string(), 11)]);
}

/// A cart never written and a cart just emptied both read as empty.
///
/// `user_id` must not have been written before.
pub async fn reads_absent_cart_as_empty(store: &dyn CartStore, user_id: &UserId) {
    let untouched = store.get_cart(user_id).await.expect("get_cart");
    assert!(untouched.is_empty());
    assert_eq!(&untouched.user_id, user_id);

    store.add_item(user_id, "P1", 1).await.expect("add_item");
    store.empty_cart(user_id).await.expect("empty_cart");
    store
        .empty_cart(user_id)
        .await
        .expect("emptying twice succeeds");

    let emptied = store.get_cart(user_id).await.expect("get_cart");
    assert!(emptied.is_empty());
    assert_eq!(&emptied.user_id, user_id);
}

/// Different products accumulate independently.
pub async fn keeps_distinct_products_apart(store: &dyn CartStore, user_id: &UserId) {
    store.empty_cart(user_id).await.expect("empty_cart");

    store.add_item(user_id, "A", 3).await.expect("add_item");
    store.add_item(user_id, "B", 5).await.expect("add_item");

    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(
        items(&cart),
        vec![("A".to_string(), 3), ("B".to_string(), 5)]
    );
}

/// Carts of different users do not see each other.
pub async fn isolates_users(store: &dyn CartStore, first: &UserId, second: &UserId) {
    store.empty_cart(first).await.expect("empty_cart");
    store.empty_cart(second).await.expect("empty_cart");

    store.add_item(first, "A", 1).await.expect("add_item");
    store.add_item(second, "A", 9).await.expect("add_item");
    store.empty_cart(second).await.expect("empty_cart");

    let cart = store.get_cart(first).await.expect("get_cart");
    assert_eq!(items(&cart), vec![("A".to_string(), 1)]);
}

/// Calling `initialize` again before use changes nothing observable.
pub async fn initializes_idempotently(store: &dyn CartStore, user_id: &UserId) {
    store.initialize().await.expect("initialize");
    store.initialize().await.expect("second initialize");

    store.empty_cart(user_id).await.expect("empty_cart");
    store.add_item(user_id, "P1", 2).await.expect("add_item");

    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(items(&cart), vec![("P1".to_string(), 2)]);
}

/// add shoes:2, add shoes:3, empty.
pub async fn runs_shopping_scenario(store: &dyn CartStore, user_id: &UserId) {
    store.empty_cart(user_id).await.expect("empty_cart");

    store.add_item(user_id, "shoes", 2).await.expect("add_item");
    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(&cart.user_id, user_id);
    assert_eq!(items(&cart), vec![("shoes".to_string(), 2)]);

    store.add_item(user_id, "shoes", 3).await.expect("add_item");
    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(items(&cart), vec![("shoes".to_string(), 5)]);

    store.empty_cart(user_id).await.expect("empty_cart");
    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(&cart.user_id, user_id);
    assert!(cart.is_empty());
}

/// Identifiers have no length limit.
pub async fn accepts_long_identifiers(store: &dyn CartStore, user_id: &UserId) {
    let product_id = "P".repeat(1024);

    store.empty_cart(user_id).await.expect("empty_cart");
    store.add_item(user_id, &product_id, 2).await.expect("add_item");
    store.add_item(user_id, &product_id, 1).await.expect("add_item");

    let cart = store.get_cart(user_id).await.expect("get_cart");
    assert_eq!(&cart.user_id, user_id);
    assert_eq!(items(&cart), vec![(product_id, 3)]);
}

/// With the backend down, ping reports `false` and every data call fails
/// with `StorageUnavailable`.
pub async fn reports_unreachable_backend(store: &dyn CartStore) {
    let user_id = UserId::new("unreachable-user");

    assert!(!store.ping().await);

    let err = store.add_item(&user_id, "P1", 1).await.unwrap_err();
    assert!(err.is_storage_unavailable(), "add_item: {err:?}");

    let err = store.empty_cart(&user_id).await.unwrap_err();
    assert!(err.is_storage_unavailable(), "empty_cart: {err:?}");

    let err = store.get_cart(&user_id).await.unwrap_err();
    assert!(err.is_storage_unavailable(), "get_cart: {err:?}");
}

/// Runs every check that needs a reachable backend. Users are derived from
/// `prefix`, which must be unique per run.
pub async fn run_all(store: &dyn CartStore, prefix: &str) {
    let user = |name: &str| UserId::new(format!("{prefix}-{name}"));

    initializes_idempotently(store, &user("init")).await;
    merges_quantities_of_same_product(store, &user("merge")).await;
    reads_absent_cart_as_empty(store, &user("absent")).await;
    keeps_distinct_products_apart(store, &user("distinct")).await;
    isolates_users(store, &user("first"), &user("second")).await;
    runs_shopping_scenario(store, &user("scenario")).await;
    accepts_long_identifiers(store, &user(&"long".repeat(256))).await;
}
