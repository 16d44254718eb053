//! Product catalog module.
//!
//! The listing markup is the catalog: products are read from element
//! attributes on demand and never cached.

mod product;

pub use product::{Product, ProductAttributes};
