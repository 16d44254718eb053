//! Listing filter types.

use crate::catalog::ProductAttributes;
use crate::money::{parse_decimal_prefix, Money, Price};
use serde::{Deserialize, Serialize};

/// Upper bound on a product's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PriceBound {
    /// No upper bound.
    #[default]
    Unbounded,
    /// Price must not exceed this amount.
    AtMost(Money),
}

impl PriceBound {
    /// Parse the max-price field.
    ///
    /// Empty, non-numeric and zero inputs all leave the listing unbounded.
    pub fn parse(raw: &str) -> Self {
        match parse_decimal_prefix(raw) {
            None => PriceBound::Unbounded,
            Some(v) if v == 0.0 => PriceBound::Unbounded,
            Some(v) => match Money::from_decimal(v) {
                Some(max) => PriceBound::AtMost(max),
                None if v < 0.0 => PriceBound::AtMost(Money::new(i64::MIN)),
                None => PriceBound::Unbounded,
            },
        }
    }

    /// Check whether a price fits under the bound. `NaN` never does.
    pub fn admits(&self, price: Price) -> bool {
        match (self, price) {
            (_, Price::NaN) => false,
            (PriceBound::Unbounded, Price::Amount(_)) => true,
            (PriceBound::AtMost(max), Price::Amount(p)) => p <= *max,
        }
    }
}

/// Text and price filter over the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListingFilter {
    /// Lowercased search text.
    pub query: String,
    /// Price bound.
    pub max_price: PriceBound,
}

impl ListingFilter {
    /// Create a filter from a search string and a price bound.
    pub fn new(query: &str, max_price: PriceBound) -> Self {
        Self {
            query: query.to_lowercase(),
            max_price,
        }
    }

    /// Build the filter from the raw search and max-price field values.
    pub fn from_inputs(search: &str, max_price: &str) -> Self {
        Self::new(search, PriceBound::parse(max_price))
    }

    /// Check whether a product element should stay visible.
    pub fn matches(&self, attrs: &ProductAttributes) -> bool {
        let matches_text = attrs.name().to_lowercase().contains(&self.query)
            || attrs.brand().to_lowercase().contains(&self.query);
        matches_text && self.max_price.admits(attrs.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, brand: &str, price: &str) -> ProductAttributes {
        ProductAttributes::new(name, name, brand, price)
    }

    #[test]
    fn test_bound_parsing() {
        assert_eq!(PriceBound::parse(""), PriceBound::Unbounded);
        assert_eq!(PriceBound::parse("abc"), PriceBound::Unbounded);
        assert_eq!(PriceBound::parse("0"), PriceBound::Unbounded);
        assert_eq!(PriceBound::parse("500"), PriceBound::AtMost(Money::new(50000)));
        assert_eq!(PriceBound::parse("99.5€"), PriceBound::AtMost(Money::new(9950)));
        assert_eq!(PriceBound::parse("Infinity"), PriceBound::Unbounded);
    }

    #[test]
    fn test_bound_is_inclusive() {
        let bound = PriceBound::AtMost(Money::new(50000));
        assert!(bound.admits(Price::cents(50000)));
        assert!(!bound.admits(Price::cents(50001)));
        assert!(!PriceBound::Unbounded.admits(Price::NaN));
    }

    #[test]
    fn test_prices_compare_at_cent_precision() {
        let bound = PriceBound::parse("10.001");
        assert!(bound.admits(card("x", "", "10.004").price()));
        assert!(!bound.admits(card("x", "", "10.006").price()));
        assert!(!PriceBound::Unbounded.admits(card("x", "", "1e300").price()));
    }

    #[test]
    fn test_text_matches_name_or_brand() {
        let filter = ListingFilter::from_inputs("PHONE", "");
        assert!(filter.matches(&card("Smartphone X", "Acme", "300")));
        assert!(filter.matches(&card("Casque", "PhoneCorp", "50")));
        assert!(!filter.matches(&card("Clavier", "Logi", "80")));
    }

    #[test]
    fn test_text_and_price_combine() {
        let filter = ListingFilter::from_inputs("phone", "500");
        assert!(filter.matches(&card("phone a", "x", "499.99")));
        assert!(!filter.matches(&card("phone b", "x", "500.01")));
        assert!(!filter.matches(&card("tablet", "x", "100")));
    }

    #[test]
    fn test_empty_query_matches_everything_priced() {
        let filter = ListingFilter::default();
        assert!(filter.matches(&card("anything", "", "1")));
        assert!(!filter.matches(&card("broken", "", "n/a")));
    }

    #[test]
    fn test_missing_name_and_brand_read_as_empty() {
        let attrs = ProductAttributes {
            id: Some("x".into()),
            price: Some("10".into()),
            ..Default::default()
        };
        assert!(ListingFilter::from_inputs("", "").matches(&attrs));
        assert!(!ListingFilter::from_inputs("a", "").matches(&attrs));
    }
}
