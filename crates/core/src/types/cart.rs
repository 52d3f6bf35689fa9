//! The shopping cart state container.
//!
//! The cart is a list of line items keyed by a composite line id
//! (`{product_id}-{size}`), so the same product in two sizes is two rows
//! while re-adding the same size merges quantities. Aggregates are computed
//! from the current items on every call, so they can never go stale
//! relative to the last mutation.
//!
//! Invariants:
//! - every line quantity is >= 1; a quantity update that would reach 0
//!   removes the line instead
//! - insertion order is preserved across merges and removals

use serde::{Deserialize, Serialize};

use crate::{Category, Price, ProductId};

/// Build the composite line id for a product in a given size.
#[must_use]
pub fn line_key(product: &ProductId, size: &str) -> String {
    format!("{product}-{size}")
}

/// One row in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Composite line id; the merge key.
    pub id: String,
    /// Display name, including the size suffix.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference for cart rendering.
    pub image: String,
    pub category: Category,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The shopping cart for one session.
///
/// Mutations never fail; they at most do nothing. All surfaces that render
/// cart state (header badge, cart page, checkout) must read the same cart
/// instance - in the storefront that instance is the session row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Current line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Returns `true` if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line item. If a line with the same id already exists its
    /// quantity is incremented by the incoming quantity; otherwise the line
    /// is appended. A zero incoming quantity counts as 1.
    pub fn add(&mut self, item: CartLine) {
        let quantity = item.quantity.max(1);
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLine { quantity, ..item });
        }
    }

    /// Set a line's quantity. Zero removes the line entirely; an unknown id
    /// is a no-op.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line by id; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines; 0 for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of unit price times quantity across all lines; zero for an empty
    /// cart. Pure integer arithmetic, no rounding.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_owned(),
            name: format!("Item {id}"),
            price: Price::new(price),
            image: "/static/img/products/item.jpg".to_owned(),
            category: Category::Hoodies,
            quantity,
        }
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 1));
        cart.add(line("hoodie-rose-M", 450_000, 2));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_merge_law_over_many_adds() {
        let mut cart = Cart::new();
        let mut expected = 0u32;
        for quantity in 1..=10 {
            cart.add(line("tee-beige-L", 225_000, quantity));
            expected += quantity;
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), expected);
    }

    #[test]
    fn test_same_product_different_sizes_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 1));
        cart.add(line("hoodie-rose-L", 450_000, 1));

        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_add_zero_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(line("tee-beige-L", 225_000, 0));
        assert_eq!(cart.items().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(line("tee-beige-L", 225_000, 3));
        cart.set_quantity("tee-beige-L", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("tee-beige-L", 225_000, 3));
        cart.set_quantity("missing", 5);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("tee-beige-L", 225_000, 3));
        cart.remove("missing");
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 2));
        cart.add(line("sweater-brown-S", 380_000, 1));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Price::new(1_280_000));
    }

    #[test]
    fn test_totals_exact_over_many_additions() {
        // 1000 adds of a small unit amount sum exactly, with no drift
        let mut cart = Cart::new();
        for _ in 0..1000 {
            cart.add(line("cap-black-OS", 100, 1));
        }
        assert_eq!(cart.total_items(), 1000);
        assert_eq!(cart.total_price(), Price::new(100_000));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 2));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(line("a-M", 100, 1));
        cart.add(line("b-M", 100, 1));
        cart.add(line("a-M", 100, 1));

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a-M", "b-M"]);
    }

    #[test]
    fn test_line_key() {
        let product = ProductId::parse("hoodie-rose").unwrap();
        assert_eq!(line_key(&product, "XL"), "hoodie-rose-XL");
    }

    #[test]
    fn test_cart_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 2));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
