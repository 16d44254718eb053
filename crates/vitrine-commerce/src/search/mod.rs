//! Listing search module.
//!
//! Contains the text/price filter, the sort options and the pass that applies
//! both to a listing.

mod collate;
mod filter;
mod query;

pub use collate::locale_compare;
pub use filter::{ListingFilter, PriceBound};
pub use query::{Listed, ListingQuery, ListingSummary, SortOption};
