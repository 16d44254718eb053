//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all line quantities.
    pub total_quantity: u64,
    /// Sum of all line subtotals.
    pub grand_total: Price,
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check whether any line carries an unparseable price.
    pub fn has_invalid_prices(&self) -> bool {
        self.line_items.iter().any(|l| l.unit_price.is_nan())
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Price,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Price,
}

impl LineItemPricing {
    /// Text shown under the title, e.g. "49,99 € x 2".
    pub fn unit_line(&self) -> String {
        format!("{} x {}", self.unit_price.display(), self.quantity)
    }
}
