//! Capability-tagged regions.
//!
//! Every interactive control the widget renders carries a `data-region`
//! attribute naming what it does. A click is resolved from that tag alone,
//! so the host never walks ancestors to find out what was clicked.

use std::fmt;

use serde::{Deserialize, Serialize};
use vitrine_commerce::ProductId;

use crate::error::WidgetError;

/// Stable handle on a product element.
///
/// Keys are assigned in markup order when the listing is loaded and survive
/// any later reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(pub usize);

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interactive affordances inside a product element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affordance {
    /// "Ajouter": put one unit in the cart.
    Add,
    /// "Détails": open the product modal.
    Details,
}

/// A tagged region of the document.
///
/// Serializes as its tag, e.g. `"card:3:add"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    /// Somewhere inside a product element, optionally on one of its
    /// affordances.
    Card {
        card: CardKey,
        affordance: Option<Affordance>,
    },
    /// The cart toggle in the header.
    CartOpen,
    /// The close button of the cart panel.
    CartClose,
    /// The backdrop behind the cart panel.
    CartBackdrop,
    /// The removal control of one cart row.
    CartRemove(ProductId),
    /// The checkout button.
    Checkout,
    /// The clear-cart button.
    ClearCart,
    /// The close button of the product modal.
    ModalClose,
    /// The backdrop behind the product modal.
    ModalBackdrop,
    /// The modal's add button.
    ModalAdd,
}

impl Region {
    /// Region for a product element's body.
    pub fn card(card: CardKey) -> Self {
        Region::Card {
            card,
            affordance: None,
        }
    }

    /// Region for one affordance of a product element.
    pub fn affordance(card: CardKey, affordance: Affordance) -> Self {
        Region::Card {
            card,
            affordance: Some(affordance),
        }
    }

    /// The `data-region` value for this region.
    pub fn tag(&self) -> String {
        match self {
            Region::Card {
                card,
                affordance: None,
            } => format!("card:{}", card),
            Region::Card {
                card,
                affordance: Some(Affordance::Add),
            } => format!("card:{}:add", card),
            Region::Card {
                card,
                affordance: Some(Affordance::Details),
            } => format!("card:{}:details", card),
            Region::CartOpen => "cart-open".to_string(),
            Region::CartClose => "cart-close".to_string(),
            Region::CartBackdrop => "cart-backdrop".to_string(),
            Region::CartRemove(id) => format!("cart-remove:{}", id),
            Region::Checkout => "checkout".to_string(),
            Region::ClearCart => "clear-cart".to_string(),
            Region::ModalClose => "modal-close".to_string(),
            Region::ModalBackdrop => "modal-backdrop".to_string(),
            Region::ModalAdd => "modal-add".to_string(),
        }
    }

    /// Parse a `data-region` value.
    pub fn parse(tag: &str) -> Result<Self, WidgetError> {
        let unknown = || WidgetError::UnknownRegion(tag.to_string());

        let region = match tag {
            "cart-open" => Region::CartOpen,
            "cart-close" => Region::CartClose,
            "cart-backdrop" => Region::CartBackdrop,
            "checkout" => Region::Checkout,
            "clear-cart" => Region::ClearCart,
            "modal-close" => Region::ModalClose,
            "modal-backdrop" => Region::ModalBackdrop,
            "modal-add" => Region::ModalAdd,
            _ => {
                if let Some(id) = tag.strip_prefix("cart-remove:") {
                    return Ok(Region::CartRemove(ProductId::new(id)));
                }
                let rest = tag.strip_prefix("card:").ok_or_else(unknown)?;
                let (key, affordance) = match rest.split_once(':') {
                    None => (rest, None),
                    Some((key, "add")) => (key, Some(Affordance::Add)),
                    Some((key, "details")) => (key, Some(Affordance::Details)),
                    Some(_) => return Err(unknown()),
                };
                let key = key.parse().map_err(|_| unknown())?;
                Region::Card {
                    card: CardKey(key),
                    affordance,
                }
            }
        };

        Ok(region)
    }
}

impl TryFrom<String> for Region {
    type Error = WidgetError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Region::parse(&tag)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.tag()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
