//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the catalog, cart drawer, header badge and
//! sticky cart button all read one cart.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::content::PRODUCTS;
use crate::models::CartItem;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Session cart, empty on every page load
    pub cart: Cart,
    /// Whether the cart drawer is shown
    pub cart_open: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Cart Mutations
// ========================

/// Add one unit of a catalog product and open the drawer.
/// Unknown ids are ignored, leave the drawer closed and return `false`.
pub fn store_add_to_cart(store: &AppStore, product_id: u32) -> bool {
    let added = store.cart().write().add_from_catalog(PRODUCTS, product_id);
    if added {
        *store.cart_open().write() = true;
    }
    added
}

pub fn store_increment(store: &AppStore, id: u32) {
    store.cart().write().increment(id);
}

pub fn store_decrement(store: &AppStore, id: u32) {
    store.cart().write().decrement(id);
}

pub fn store_remove_item(store: &AppStore, id: u32) -> bool {
    store.cart().write().remove(id)
}

pub fn store_set_cart_open(store: &AppStore, open: bool) {
    *store.cart_open().write() = open;
}

// ========================
// Cart Readers (tracked)
// ========================

pub fn cart_items(store: &AppStore) -> Vec<CartItem> {
    store.cart().read().items().to_vec()
}

pub fn cart_subtotal(store: &AppStore) -> u64 {
    store.cart().read().subtotal()
}

pub fn cart_item_count(store: &AppStore) -> u32 {
    store.cart().read().item_count()
}

pub fn cart_is_empty(store: &AppStore) -> bool {
    store.cart().read().is_empty()
}

pub fn is_cart_open(store: &AppStore) -> bool {
    *store.cart_open().read()
}

/// Snapshot without subscribing, for event handlers
pub fn cart_snapshot(store: &AppStore) -> Cart {
    store.cart().read_untracked().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &AppStore) -> Vec<(u32, u32)> {
        cart_snapshot(store).items().iter().map(|i| (i.id, i.qty)).collect()
    }

    #[test]
    fn test_add_opens_drawer() {
        let store = Store::new(AppState::new());
        assert!(!is_cart_open(&store));

        assert!(store_add_to_cart(&store, 1));
        assert!(is_cart_open(&store));
        assert_eq!(ids(&store), vec![(1, 1)]);
        assert_eq!(cart_item_count(&store), 1);
    }

    #[test]
    fn test_add_unknown_keeps_drawer_closed() {
        let store = Store::new(AppState::new());
        assert!(!store_add_to_cart(&store, 999));
        assert!(!is_cart_open(&store));
        assert!(cart_is_empty(&store));
    }

    #[test]
    fn test_decrement_removes_line() {
        let store = Store::new(AppState::new());
        store_add_to_cart(&store, 1);
        store_add_to_cart(&store, 2);
        store_increment(&store, 2);
        assert_eq!(cart_subtotal(&store), 3 * 8900);

        store_decrement(&store, 1);
        assert_eq!(ids(&store), vec![(2, 2)]);
        assert_eq!(cart_items(&store).len(), 1);

        store_set_cart_open(&store, false);
        assert!(store_remove_item(&store, 2));
        assert!(cart_is_empty(&store));
        assert!(!is_cart_open(&store));
    }
}
