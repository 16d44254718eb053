//! Vitrine storefront widget.
//!
//! Controllers for a single storefront page: the cart panel, the product
//! detail modal and the filter/sort bar over the product grid. The widget
//! never touches a document itself. The host page:
//!
//! 1. builds a [`Storefront`] from the product elements of its grid,
//! 2. applies the patches of [`Storefront::startup`],
//! 3. forwards each click, input, change and keydown as a [`UiEvent`] and
//!    applies the resulting [`Dispatch`].
//!
//! Clicks are resolved through the `data-region` tag of the element hit, see
//! [`region`].
//!
//! # Example
//!
//! ```
//! use vitrine_commerce::catalog::ProductAttributes;
//! use vitrine_widget::{Storefront, UiEvent, WidgetConfig};
//!
//! let mut store = Storefront::new(
//!     WidgetConfig::default(),
//!     [ProductAttributes::new("ps5", "PlayStation 5", "Sony", "499.99")],
//! );
//! store.startup_at(2026);
//!
//! let dispatch = store.handle(&UiEvent::click_tag("card:0:add").unwrap());
//! assert_eq!(dispatch.patches.text_of("cartCount"), Some("1"));
//! assert!(store.is_cart_open());
//! ```

pub mod cart_view;
pub mod config;
pub mod error;
pub mod html;
pub mod intent;
pub mod listing;
pub mod modal;
pub mod patch;
pub mod region;
pub mod storefront;

pub use cart_view::{CartRow, CartView, EMPTY_CART_MESSAGE};
pub use config::{HookIds, LoggingConfig, OptionalControls, WidgetConfig};
pub use error::WidgetError;
pub use intent::{Field, Intent, UiEvent};
pub use listing::{Listing, ProductCard};
pub use modal::{ModalController, ModalState};
pub use patch::{Patch, Patches};
pub use region::{Affordance, CardKey, Region};
pub use storefront::{Dispatch, FilterInputs, Notice, Storefront};
