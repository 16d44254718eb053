//! Raw events and the intents they resolve to.

use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ProductId;

use crate::config::OptionalControls;
use crate::error::WidgetError;
use crate::listing::Listing;
use crate::region::{Affordance, Region};

/// Filter controls that emit value events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Search,
    MaxPrice,
    Sort,
}

/// A raw event from the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Click on a tagged region.
    Click { region: Region },
    /// `input` on a field.
    Input { field: Field, value: String },
    /// `change` on a field.
    Change { field: Field, value: String },
    /// `keydown` anywhere in the document.
    KeyDown { key: String },
}

impl UiEvent {
    /// Click on the region named by a `data-region` tag.
    pub fn click_tag(tag: &str) -> Result<Self, WidgetError> {
        Ok(UiEvent::Click {
            region: Region::parse(tag)?,
        })
    }

    pub fn click(region: Region) -> Self {
        UiEvent::Click { region }
    }

    pub fn input(field: Field, value: impl Into<String>) -> Self {
        UiEvent::Input {
            field,
            value: value.into(),
        }
    }

    pub fn change(field: Field, value: impl Into<String>) -> Self {
        UiEvent::Change {
            field,
            value: value.into(),
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        UiEvent::KeyDown { key: key.into() }
    }
}

/// What an event asks the storefront to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddToCart(Product),
    ViewDetails(Product),
    RemoveFromCart(ProductId),
    OpenCart,
    CloseCart,
    CloseModal,
    ModalAdd,
    Checkout,
    ClearCart,
    /// Store a field value, then rerun the listing pass if `refresh` is set.
    SetField {
        field: Field,
        value: String,
        refresh: bool,
    },
    /// Escape: close the cart panel and the modal.
    DismissOverlays,
    None,
}

/// Resolve a raw event against the current listing.
///
/// Product elements are read here, so a click on an element without an id
/// fails before any state is touched.
pub fn resolve(
    event: &UiEvent,
    listing: &Listing,
    controls: &OptionalControls,
) -> Result<Intent, WidgetError> {
    let intent = match event {
        UiEvent::Click { region } => match region {
            Region::Card {
                card,
                affordance: Some(affordance),
            } => {
                let product = listing.card(*card)?.product()?;
                match affordance {
                    Affordance::Add => Intent::AddToCart(product),
                    Affordance::Details => Intent::ViewDetails(product),
                }
            }
            Region::Card {
                affordance: None, ..
            } => Intent::None,
            Region::CartOpen => Intent::OpenCart,
            Region::CartClose | Region::CartBackdrop => Intent::CloseCart,
            Region::CartRemove(id) => Intent::RemoveFromCart(id.clone()),
            Region::ModalClose | Region::ModalBackdrop => Intent::CloseModal,
            Region::ModalAdd => Intent::ModalAdd,
            Region::Checkout if controls.checkout => Intent::Checkout,
            Region::ClearCart if controls.clear_cart => Intent::ClearCart,
            Region::Checkout | Region::ClearCart => Intent::None,
        },
        UiEvent::Input { field, value } => Intent::SetField {
            field: *field,
            value: value.clone(),
            refresh: matches!(field, Field::Search | Field::MaxPrice),
        },
        UiEvent::Change { field, value } => Intent::SetField {
            field: *field,
            value: value.clone(),
            refresh: *field == Field::Sort,
        },
        UiEvent::KeyDown { key } if key == "Escape" => Intent::DismissOverlays,
        UiEvent::KeyDown { .. } => Intent::None,
    };

    Ok(intent)
}
