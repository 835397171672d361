//! Cart store and cart lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Item;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

/// Receiver of "add this item" effects.
///
/// The swipe session writes commits through this seam so it never needs
/// to know how the cart is stored.
pub trait CartSink {
    /// Add one unit of `item`.
    fn add_item(&mut self, item: &Item);
}

/// The per-item quantity record held by the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The item being bought.
    pub item: Item,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.item.price.saturating_mul(self.quantity)
    }
}

/// Authoritative mapping from item identifier to cart line.
///
/// Created once per browsing session and handed to every consumer; lives
/// until the process exits or [`CartStore::clear`] is called. Lines keep
/// the order in which items were first added.
///
/// Serializable for output only. A cart is never rebuilt from data, since
/// that could bypass the one-line-per-item and positive-quantity rules.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartStore {
    currency: Currency,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart whose totals are expressed in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add one unit of an item.
    ///
    /// Creates a line with quantity 1 on first add, otherwise increments.
    pub fn add_item(&mut self, item: &Item) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(item = %item.id, quantity = line.quantity, "cart line incremented");
            return;
        }

        self.lines.push(CartLine::new(item.clone()));
        debug!(item = %item.id, "cart line created");
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.item.id == item_id) {
            line.quantity = quantity;
            debug!(item = %item_id, quantity, "cart line quantity set");
        }
    }

    /// Add one to a line's quantity.
    pub fn increment(&mut self, item_id: &ItemId) {
        if let Some(quantity) = self.quantity_of(item_id) {
            self.update_quantity(item_id, quantity.saturating_add(1));
        }
    }

    /// Subtract one from a line's quantity, removing it at zero.
    pub fn decrement(&mut self, item_id: &ItemId) {
        if let Some(quantity) = self.quantity_of(item_id) {
            self.update_quantity(item_id, quantity - 1);
        }
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.item.id != item_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(item = %item_id, "cart line removed");
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cart cleared");
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, l| {
                acc.saturating_add(&l.line_total())
            })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for an item.
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item.id == item_id)
    }

    /// Quantity held for an item, if it is in the cart.
    pub fn quantity_of(&self, item_id: &ItemId) -> Option<i64> {
        self.line(item_id).map(|l| l.quantity)
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency totals are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Snapshot for the cart summary view.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|l| CartSummaryLine {
                    item_id: l.item.id.clone(),
                    name: l.item.name.clone(),
                    weight: l.item.weight.clone(),
                    unit_price: l.item.price,
                    quantity: l.quantity,
                    line_total: l.line_total(),
                })
                .collect(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl CartSink for CartStore {
    fn add_item(&mut self, item: &Item) {
        CartStore::add_item(self, item);
    }
}

/// Read-only view of the cart for display or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub total_items: i64,
    pub total_price: Money,
}

/// One row of a [`CartSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummaryLine {
    pub item_id: ItemId,
    pub name: String,
    pub weight: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64) -> Item {
        Item::new(id, id.to_uppercase(), Money::from_major(price, Currency::UAH), "seafood")
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartStore::new(Currency::UAH);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_item_creates_line() {
        let mut cart = CartStore::new(Currency::UAH);
        cart.add_item(&item("ebi", 340));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ItemId::new("ebi")), Some(1));
    }

    #[test]
    fn test_add_same_item_increments() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);
        cart.add_item(&ebi);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ebi.id), Some(2));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_update_quantity_sets_absolute() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);
        cart.add_item(&ebi);

        cart.update_quantity(&ebi.id, 5);
        assert_eq!(cart.quantity_of(&ebi.id), Some(5));
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        let unagi = item("unagi", 450);
        cart.add_item(&ebi);
        cart.add_item(&unagi);

        cart.update_quantity(&ebi.id, 0);
        assert!(cart.line(&ebi.id).is_none());
        assert_eq!(cart.total_items(), 1);

        cart.update_quantity(&unagi.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_is_noop() {
        let mut cart = CartStore::new(Currency::UAH);
        cart.add_item(&item("ebi", 340));
        let before = cart.clone();

        cart.update_quantity(&ItemId::new("missing"), 0);
        cart.update_quantity(&ItemId::new("missing"), 4);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);

        assert!(cart.remove_item(&ebi.id));
        assert!(!cart.remove_item(&ebi.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_decrement() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);

        cart.increment(&ebi.id);
        assert_eq!(cart.quantity_of(&ebi.id), Some(2));

        cart.decrement(&ebi.id);
        cart.decrement(&ebi.id);
        assert!(cart.is_empty());

        cart.increment(&ebi.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new(Currency::UAH);
        cart.add_item(&item("ebi", 340));
        cart.add_item(&item("unagi", 450));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_total_price() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);
        cart.add_item(&ebi);
        cart.add_item(&item("unagi", 450));

        assert_eq!(cart.total_price(), Money::from_major(1130, Currency::UAH));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartStore::new(Currency::UAH);
        cart.add_item(&item("b", 1));
        cart.add_item(&item("a", 1));
        cart.add_item(&item("b", 1));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_summary() {
        let mut cart = CartStore::new(Currency::UAH);
        let ebi = item("ebi", 340);
        cart.add_item(&ebi);
        cart.add_item(&ebi);

        let summary = cart.summary();
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.lines[0].line_total, Money::from_major(680, Currency::UAH));
        assert_eq!(summary.total_price, summary.lines[0].line_total);
    }

    #[test]
    fn test_serializes_for_output() {
        let mut cart = CartStore::new(Currency::UAH);
        cart.add_item(&item("ebi", 340));
        cart.add_item(&item("ebi", 340));

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["currency"], "UAH");
        assert_eq!(value["lines"].as_array().map(|l| l.len()), Some(1));
        assert_eq!(value["lines"][0]["quantity"], 2);
    }
}
