//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Line items keep insertion order and there is at most one per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line for `id` gains one unit; otherwise a new line with
    /// quantity 1 is appended. Returns the line's quantity after the add.
    pub fn add_item(
        &mut self,
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::new(id, title, price, image));
        1
    }

    /// Remove the whole line for a product.
    ///
    /// Returns false when the product was not in the cart.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product ID.
    pub fn get_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Sum of `price × quantity` over every line.
    pub fn total_price(&self) -> Price {
        Price::sum(self.items.iter().map(LineItem::subtotal))
    }

    /// Calculate the full pricing breakdown.
    pub fn calculate_pricing(&self) -> CartPricing {
        let line_items: Vec<LineItemPricing> = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.id.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        let grand_total = Price::sum(line_items.iter().map(|l| l.subtotal));

        CartPricing {
            total_quantity: self.item_count(),
            grand_total,
            line_items,
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Image URL, possibly empty.
    pub image: String,
    /// Quantity, never zero.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item holding one unit.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(cart: &mut Cart, id: &str, cents: i64) -> u32 {
        cart.add_item(ProductId::new(id), id.to_uppercase(), Price::cents(cents), "")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Price::cents(0));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(add(&mut cart, "ps5", 49999), 1);
        assert_eq!(add(&mut cart, "ps5", 49999), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get_item(&ProductId::new("ps5")).unwrap().quantity, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        add(&mut cart, "b", 100);
        add(&mut cart, "a", 100);
        add(&mut cart, "b", 100);

        let ids: Vec<&str> = cart.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_repeat_add_keeps_first_title_and_price() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p"), "First", Price::cents(100), "a.png");
        cart.add_item(ProductId::new("p"), "Second", Price::cents(999), "b.png");

        let line = cart.get_item(&ProductId::new("p")).unwrap();
        assert_eq!(line.title, "First");
        assert_eq!(line.price, Price::cents(100));
        assert_eq!(line.image, "a.png");
    }

    #[test]
    fn test_remove_item_drops_whole_line() {
        let mut cart = Cart::new();
        add(&mut cart, "p", 100);
        add(&mut cart, "p", 100);

        assert!(cart.remove_item(&ProductId::new("p")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = Cart::new();
        add(&mut cart, "p", 100);
        let before = cart.clone();

        assert!(!cart.remove_item(&ProductId::new("ghost")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals_follow_mutations() {
        let mut cart = Cart::new();
        add(&mut cart, "a", 1000);
        add(&mut cart, "a", 1000);
        add(&mut cart, "b", 2550);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_price(), Price::cents(4550));

        cart.remove_item(&ProductId::new("a"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_price(), Price::cents(2550));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Price::cents(0));
    }

    #[test]
    fn test_clear_empty_cart_is_noop() {
        let mut cart = Cart::new();
        cart.clear();
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_nan_price_poisons_total() {
        let mut cart = Cart::new();
        add(&mut cart, "ok", 1000);
        cart.add_item(ProductId::new("bad"), "Bad", Price::NaN, "");

        assert_eq!(cart.item_count(), 2);
        assert!(cart.total_price().is_nan());
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        add(&mut cart, "a", 1000);
        add(&mut cart, "a", 1000);
        add(&mut cart, "b", 2000);

        let pricing = cart.calculate_pricing();
        assert_eq!(pricing.total_quantity, 3);
        assert_eq!(pricing.grand_total, Price::cents(4000));
        assert_eq!(pricing.line_items[0].subtotal, Price::cents(2000));
        assert_eq!(pricing.line_items[1].quantity, 1);
    }
}
