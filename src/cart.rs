//! Shopping Cart
//!
//! Insertion-ordered line items with at most one entry per product.
//! Unknown ids are ignored by every operation; the returned `bool` only
//! reports whether an entry matched.

use crate::models::{CartItem, Product};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add one unit of `product_id` from `catalog`.
    /// Existing entries keep their position; new ones go to the end.
    pub fn add_from_catalog(&mut self, catalog: &[Product], product_id: u32) -> bool {
        match catalog.iter().find(|p| p.id == product_id) {
            Some(product) => {
                self.add(product);
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => item.qty += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
    }

    pub fn increment(&mut self, id: u32) -> bool {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| item.qty += 1)
            .is_some()
    }

    /// Quantity 1 removes the entry instead of reaching 0
    pub fn decrement(&mut self, id: u32) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        if self.items[idx].qty > 1 {
            self.items[idx].qty -= 1;
        } else {
            self.items.remove(idx);
        }
        true
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Sum of price × qty, in grosze
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total units across all entries (badge count)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product { id: 1, title: "A", description: "", price_cents: 8900, image: "" },
            Product { id: 2, title: "B", description: "", price_cents: 8900, image: "" },
            Product { id: 3, title: "C", description: "", price_cents: 1250, image: "" },
        ]
    }

    fn snapshot(cart: &Cart) -> Vec<(u32, u32)> {
        cart.items().iter().map(|i| (i.id, i.qty)).collect()
    }

    #[test]
    fn test_add_merges_by_id_and_keeps_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for id in [2, 1, 2, 3, 2, 1] {
            assert!(cart.add_from_catalog(&catalog, id));
        }
        assert_eq!(snapshot(&cart), vec![(2, 3), (1, 2), (3, 1)]);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_from_catalog(&catalog, 1);
        let before = cart.clone();
        assert!(!cart.add_from_catalog(&catalog, 42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_copies_title_and_price() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_from_catalog(&catalog, 3);
        let item = cart.get(3).unwrap();
        assert_eq!(item.title, "C");
        assert_eq!(item.price_cents, 1250);
        assert_eq!(item.qty, 1);
    }

    #[test]
    fn test_subtotal() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.subtotal(), 0);
        cart.add_from_catalog(&catalog, 1);
        cart.add_from_catalog(&catalog, 2);
        cart.add_from_catalog(&catalog, 2);
        assert_eq!(cart.subtotal(), 26700);
        cart.add_from_catalog(&catalog, 3);
        assert_eq!(cart.subtotal(), 26700 + 1250);
    }

    #[test]
    fn test_increment() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_from_catalog(&catalog, 1);
        assert!(cart.increment(1));
        assert_eq!(cart.get(1).unwrap().qty, 2);

        let before = cart.clone();
        assert!(!cart.increment(7));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_removes_at_one() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_from_catalog(&catalog, 1);
        cart.add_from_catalog(&catalog, 2);
        cart.add_from_catalog(&catalog, 2);

        assert!(cart.decrement(2));
        assert_eq!(cart.get(2).unwrap().qty, 1);

        let len = cart.len();
        assert!(cart.decrement(1));
        assert_eq!(cart.len(), len - 1);
        assert!(cart.get(1).is_none());
        assert!(cart.items().iter().all(|i| i.qty >= 1));
    }

    #[test]
    fn test_decrement_unknown_is_noop() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_from_catalog(&catalog, 1);
        let before = cart.clone();
        assert!(!cart.decrement(5));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add_from_catalog(&catalog, 3);
        }
        cart.add_from_catalog(&catalog, 1);
        assert!(cart.remove(3));
        assert_eq!(snapshot(&cart), vec![(1, 1)]);
        assert!(!cart.remove(3));
    }

    #[test]
    fn test_quantities_stay_positive() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let ops: [(u8, u32); 12] = [
            (0, 1), (0, 2), (2, 1), (2, 1), (1, 2), (2, 2),
            (0, 3), (2, 3), (2, 3), (1, 1), (0, 1), (2, 2),
        ];
        for (op, id) in ops {
            match op {
                0 => { cart.add_from_catalog(&catalog, id); }
                1 => { cart.increment(id); }
                _ => { cart.decrement(id); }
            }
            assert!(cart.items().iter().all(|i| i.qty >= 1));
            let mut ids: Vec<u32> = cart.items().iter().map(|i| i.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), cart.len());
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add_from_catalog(&catalog, 1);
        assert_eq!(snapshot(&cart), vec![(1, 1)]);
        assert_eq!(cart.subtotal(), 8900);

        cart.add_from_catalog(&catalog, 1);
        assert_eq!(snapshot(&cart), vec![(1, 2)]);
        assert_eq!(cart.subtotal(), 17800);

        cart.add_from_catalog(&catalog, 2);
        assert_eq!(snapshot(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.subtotal(), 26700);

        cart.decrement(1);
        cart.decrement(1);
        assert_eq!(snapshot(&cart), vec![(2, 1)]);
        assert_eq!(cart.subtotal(), 8900);
    }

    #[test]
    fn test_site_catalog_scenario() {
        let mut cart = Cart::new();
        cart.add_from_catalog(crate::content::PRODUCTS, 1);
        cart.add_from_catalog(crate::content::PRODUCTS, 2);
        cart.add_from_catalog(crate::content::PRODUCTS, 2);
        assert_eq!(snapshot(&cart), vec![(1, 1), (2, 2)]);
        assert_eq!(cart.subtotal(), 8900 + 2 * 8900);
    }
}
