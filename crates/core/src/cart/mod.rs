//! The session cart: line items, aggregation, and totals.
//!
//! A [`Cart`] is the single source of truth for "what is the shopper about to
//! order". Repeated selection of the same product never creates duplicate
//! rows: adding a product that is already present increments its quantity.
//!
//! All operations are total - bad input is clamped or ignored, never an
//! error - because nothing that happens inside the cart should ever surface
//! to the shopper as a failure. The only state is "has N lines"; every
//! transition is one of the five operations below.
//!
//! [`store::CartStore`] wraps a `Cart` in an injectable, observable container
//! for consumers that need change notifications (the count badge, the cart
//! screen).

pub mod store;

pub use store::{CartObserver, CartStore};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchasable line in the active cart.
///
/// `name` and `price` are snapshots captured at add-time, not live references
/// into the catalog: once a line exists, later adds of the same product do
/// not refresh them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable identifier of the underlying product. Uniqueness key.
    pub id: String,
    /// Display label captured at add-time.
    pub name: String,
    /// Unit price captured at add-time.
    pub price: Decimal,
    /// Count of units. Always >= 1; a line is removed, never left at zero.
    pub quantity: u32,
    /// Display-only image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Provenance metadata for display grouping; not an aggregation key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

/// The ordered collection of [`CartLine`]s for the active session.
///
/// Invariants: line `id`s are unique, and every `quantity` is >= 1. The cart
/// serializes into the session record, so it lives exactly as long as the
/// shopper's session and no longer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line to the cart, aggregating by product id.
    ///
    /// If a line with the same `id` already exists its quantity is increased
    /// by the incoming quantity; every other field of the existing line keeps
    /// its original snapshot. Otherwise the line is appended.
    ///
    /// A zero incoming quantity is treated as 1, and a line with an empty
    /// `id` is ignored entirely - neither is an error.
    pub fn add_item(&mut self, mut line: CartLine) {
        if line.id.is_empty() {
            return;
        }
        if line.quantity == 0 {
            line.quantity = 1;
        }

        match self.lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            }
            None => self.lines.push(line),
        }
    }

    /// Remove the line with the given id. Silent no-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Set the quantity of the line with the given id.
    ///
    /// A quantity of zero removes the line entirely - decrementing to zero is
    /// equivalent to removal. No-op if the id is not present.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum over all lines of `price * quantity`. Zero for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity))
            .sum()
    }

    /// Sum of `quantity` across all lines (not the number of distinct lines).
    ///
    /// This drives the header badge, which is hidden when the count is zero.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Read snapshot of the lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_owned(),
            name: format!("product {id}"),
            price: Decimal::from(price),
            quantity,
            image: None,
            restaurant_id: None,
            restaurant_name: None,
        }
    }

    #[test]
    fn test_add_same_product_twice_aggregates() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        cart.add_item(line("b1", 90, 1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_keeps_original_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));

        // A later add with a different captured price must not refresh the
        // original snapshot, only bump the quantity.
        let mut repriced = line("b1", 120, 1);
        repriced.name = "renamed".to_owned();
        cart.add_item(repriced);

        let kept = &cart.lines()[0];
        assert_eq!(kept.price, Decimal::from(90));
        assert_eq!(kept.name, "product b1");
        assert_eq!(kept.quantity, 2);
    }

    #[test]
    fn test_add_defaults_zero_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 0));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_ignores_empty_id() {
        let mut cart = Cart::new();
        cart.add_item(line("", 90, 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 3));
        cart.update_quantity("b1", 0);

        assert!(cart.is_empty());
        assert!(!cart.lines().iter().any(|l| l.id == "b1"));
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        cart.update_quantity("b1", 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        cart.update_quantity("nope", 7);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        let before = cart.clone();

        cart.remove_item("never-added");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_price_empty_cart_is_zero() {
        assert_eq!(Cart::new().total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_count_vs_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 3));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 2));
        cart.add_item(line("f1", 35, 4));

        cart.clear();

        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_burger_and_fries_scenario() {
        // add Burger (90), add Fries (35), add Burger again
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        cart.add_item(line("f1", 35, 1));
        cart.add_item(line("b1", 90, 1));

        assert_eq!(cart.len(), 2);
        let burger = cart.lines().iter().find(|l| l.id == "b1").unwrap();
        assert_eq!(burger.quantity, 2);
        assert_eq!(cart.total_price(), Decimal::from(215));
        assert_eq!(cart.item_count(), 3);

        // dropping fries to zero removes the line and lowers the total
        cart.update_quantity("f1", 0);
        assert_eq!(cart.total_price(), Decimal::from(180));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        let mut l = line("b1", 90, 2);
        l.image = Some("https://cdn.soukexpress.app/b1.jpg".to_owned());
        l.restaurant_name = Some("Burger Palace".to_owned());
        cart.add_item(l);

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
