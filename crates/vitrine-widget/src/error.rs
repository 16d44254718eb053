//! Widget error types.

use thiserror::Error;
use vitrine_commerce::CommerceError;

/// Faults that abort an event handler.
///
/// None of these reach the shopper; the storefront logs them and leaves its
/// state as it was before the event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Reading a product failed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// A region refers to a product element that is not in the listing.
    #[error("Unknown product element: {0}")]
    UnknownCard(usize),

    /// A control the handler reads from is not in the document.
    #[error("Missing hook: {0}")]
    MissingHook(&'static str),

    /// A `data-region` tag that does not name any region.
    #[error("Unknown region tag: {0}")]
    UnknownRegion(String),
}
