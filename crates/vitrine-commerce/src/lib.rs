//! Storefront domain types and logic for Vitrine.
//!
//! This crate holds everything that does not depend on a document:
//!
//! - **Money**: euro amounts in cents, prices that may be `NaN`, French
//!   currency formatting
//! - **Catalog**: product attributes as carried by listing markup, and the
//!   reader that turns them into products
//! - **Cart**: line items, quantity aggregation, pricing
//! - **Search**: text/price filter, sort options, and the in-place listing pass
//!
//! # Example
//!
//! ```
//! use vitrine_commerce::prelude::*;
//!
//! let attrs = ProductAttributes::new("ps5", "PlayStation 5", "Sony", "499.99");
//! let product = Product::read(&attrs).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(product.id.clone(), product.title.clone(), product.price, product.image.clone());
//! cart.add_item(product.id, product.title, product.price, product.image);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total_price().display(), "999,98\u{a0}\u{20ac}");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Money, Price};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Money, Price};

    // Catalog
    pub use crate::catalog::{Product, ProductAttributes};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};

    // Search
    pub use crate::search::{
        Listed, ListingFilter, ListingQuery, ListingSummary, PriceBound, SortOption,
    };
}
