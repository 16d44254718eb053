//! Product attributes and the catalog reader.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Raw attributes carried by one product element of the listing.
///
/// Every field is optional because the markup is authored elsewhere; the
/// reader decides what a missing value means.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductAttributes {
    /// `data-id`.
    #[serde(default)]
    pub id: Option<String>,
    /// `data-name`, the display name.
    #[serde(default)]
    pub name: Option<String>,
    /// `data-brand`.
    #[serde(default)]
    pub brand: Option<String>,
    /// `data-price`, as written in the markup.
    #[serde(default)]
    pub price: Option<String>,
    /// `src` of the card image, if the card has one.
    #[serde(default)]
    pub image: Option<String>,
    /// Text of the card description, if the card has one.
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductAttributes {
    /// Create attributes with the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            brand: Some(brand.into()),
            price: Some(price.into()),
            image: None,
            description: None,
        }
    }

    /// Set the image source.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Display name, empty if absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Brand, empty if absent.
    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or_default()
    }

    /// Parsed price. Unparseable or missing values give `Price::NaN`.
    pub fn price(&self) -> Price {
        Price::parse(self.price.as_deref())
    }

    /// Parse a listing snapshot (a JSON array of attribute objects).
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A product as read from the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Brand.
    pub brand: String,
    /// Unit price.
    pub price: Price,
    /// Image URL, empty when the element has no image.
    pub image: String,
    /// Description, empty when the element has none.
    pub description: String,
}

impl Product {
    /// Read a product from element attributes.
    ///
    /// Only the identifier is mandatory; a product without one cannot be put
    /// in the cart.
    pub fn read(attrs: &ProductAttributes) -> Result<Self, CommerceError> {
        let id = attrs
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(CommerceError::MissingProductId)?;

        Ok(Self {
            id: ProductId::new(id),
            title: attrs.name().to_string(),
            brand: attrs.brand().to_string(),
            price: attrs.price(),
            image: attrs.image.clone().unwrap_or_default(),
            description: attrs.description.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_full_product() {
        let attrs = ProductAttributes::new("ps5", "PlayStation 5", "Sony", "499.99")
            .with_image("img/ps5.png")
            .with_description("Console de salon");

        let product = Product::read(&attrs).unwrap();
        assert_eq!(product.id.as_str(), "ps5");
        assert_eq!(product.title, "PlayStation 5");
        assert_eq!(product.brand, "Sony");
        assert_eq!(product.price, Price::cents(49999));
        assert_eq!(product.image, "img/ps5.png");
        assert_eq!(product.description, "Console de salon");
    }

    #[test]
    fn test_optional_fields_fall_back_to_empty() {
        let attrs = ProductAttributes::new("x", "X", "Brand", "10");
        let product = Product::read(&attrs).unwrap();
        assert_eq!(product.image, "");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_bad_price_reads_as_nan() {
        let attrs = ProductAttributes::new("x", "X", "Brand", "gratuit");
        assert!(Product::read(&attrs).unwrap().price.is_nan());

        let mut attrs = attrs;
        attrs.price = None;
        assert!(Product::read(&attrs).unwrap().price.is_nan());
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let attrs = ProductAttributes {
            name: Some("Orphan".into()),
            ..Default::default()
        };
        assert_eq!(Product::read(&attrs), Err(CommerceError::MissingProductId));
    }

    #[test]
    fn test_listing_from_json() {
        let json = r#"[
            {"id": "a", "name": "Manette", "brand": "Sony", "price": "69.99"},
            {"id": "b", "name": "Casque", "brand": "Razer", "price": "129", "image": "casque.png"}
        ]"#;
        let cards = ProductAttributes::list_from_json(json).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].image.as_deref(), Some("casque.png"));
        assert_eq!(cards[0].description, None);
    }
}
