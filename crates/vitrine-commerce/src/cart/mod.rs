//! Shopping cart module.
//!
//! Contains the cart, its line items and the pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
