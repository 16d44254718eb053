//! Listing query: filter plus sort, applied in one pass.

use crate::catalog::ProductAttributes;
use crate::search::{locale_compare, ListingFilter};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Keep the current order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortOption {
    /// Parse a sort select value. Unknown values mean featured.
    pub fn from_value(value: &str) -> Self {
        match value {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "name_asc" => SortOption::NameAsc,
            "name_desc" => SortOption::NameDesc,
            _ => SortOption::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
        }
    }

    /// All options in select order.
    pub fn all() -> [SortOption; 5] {
        [
            SortOption::Featured,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::NameAsc,
            SortOption::NameDesc,
        ]
    }

    /// Compare two product elements under this option.
    pub fn compare(&self, a: &ProductAttributes, b: &ProductAttributes) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceAsc => a.price().cmp(&b.price()),
            SortOption::PriceDesc => b.price().cmp(&a.price()),
            SortOption::NameAsc => {
                locale_compare(&a.name().to_lowercase(), &b.name().to_lowercase())
            }
            SortOption::NameDesc => {
                locale_compare(&b.name().to_lowercase(), &a.name().to_lowercase())
            }
        }
    }
}

/// Something laid out in the listing: an element with product attributes
/// and a visibility flag.
pub trait Listed {
    /// The element's product attributes.
    fn attributes(&self) -> &ProductAttributes;
    /// Whether the element is currently shown.
    fn is_visible(&self) -> bool;
    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);
}

/// Counts after a listing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Elements left visible.
    pub visible: usize,
    /// Elements hidden.
    pub hidden: usize,
}

/// A listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListingQuery {
    /// Filter to apply.
    pub filter: ListingFilter,
    /// Sort option.
    pub sort: SortOption,
}

impl ListingQuery {
    /// Create a new query that keeps everything in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from the three raw control values.
    pub fn from_inputs(search: &str, max_price: &str, sort: &str) -> Self {
        Self {
            filter: ListingFilter::from_inputs(search, max_price),
            sort: SortOption::from_value(sort),
        }
    }

    /// Set the filter.
    pub fn with_filter(mut self, filter: ListingFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Filter then sort the listing in place.
    ///
    /// Every element's visibility is recomputed. Hidden elements are not
    /// moved relative to each other; the visible ones are laid out after
    /// them in sorted order. Featured keeps the visible elements in their
    /// current order, so repeated passes drift away from markup order.
    pub fn apply<T: Listed>(&self, items: &mut Vec<T>) -> ListingSummary {
        let (mut visible, hidden): (Vec<T>, Vec<T>) = items
            .drain(..)
            .map(|mut item| {
                let matches = self.filter.matches(item.attributes());
                item.set_visible(matches);
                item
            })
            .partition(|item| item.is_visible());

        visible.sort_by(|a, b| self.sort.compare(a.attributes(), b.attributes()));

        let summary = ListingSummary {
            visible: visible.len(),
            hidden: hidden.len(),
        };
        items.extend(hidden);
        items.extend(visible);

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Card {
        attrs: ProductAttributes,
        visible: bool,
    }

    impl Listed for Card {
        fn attributes(&self) -> &ProductAttributes {
            &self.attrs
        }

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn listing() -> Vec<Card> {
        [
            ("a", "Smartphone Pro", "Acme", "899"),
            ("b", "Casque Gamer", "HyperX", "79.90"),
            ("c", "Phone Lite", "Acme", "199"),
            ("d", "Souris", "Logitech", "49"),
            ("e", "iPhone Case", "Apple", "39"),
        ]
        .into_iter()
        .map(|(id, name, brand, price)| Card {
            attrs: ProductAttributes::new(id, name, brand, price),
            visible: true,
        })
        .collect()
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards
            .iter()
            .map(|c| c.attrs.id.as_deref().unwrap_or_default())
            .collect()
    }

    fn visible_ids(cards: &[Card]) -> Vec<&str> {
        cards
            .iter()
            .filter(|c| c.is_visible())
            .map(|c| c.attrs.id.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_sort_option_values() {
        assert_eq!(SortOption::from_value("price_desc"), SortOption::PriceDesc);
        assert_eq!(SortOption::from_value("featured"), SortOption::Featured);
        assert_eq!(SortOption::from_value("whatever"), SortOption::Featured);
        for option in SortOption::all() {
            assert_eq!(SortOption::from_value(option.as_str()), option);
        }
    }

    #[test]
    fn test_filter_phone_under_500() {
        let mut cards = listing();
        let summary = ListingQuery::from_inputs("phone", "500", "featured").apply(&mut cards);

        assert_eq!(summary, ListingSummary { visible: 2, hidden: 3 });
        assert_eq!(visible_ids(&cards), vec!["c", "e"]);
        assert_eq!(ids(&cards), vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn test_sort_only_moves_visible_items() {
        let mut cards = listing();
        ListingQuery::from_inputs("phone", "", "price_asc").apply(&mut cards);

        // b and d are hidden and keep their order ahead of the sorted ones.
        assert_eq!(ids(&cards), vec!["b", "d", "e", "c", "a"]);
        assert_eq!(visible_ids(&cards), vec!["e", "c", "a"]);
    }

    #[test]
    fn test_reshown_items_stay_after_previously_visible() {
        let mut cards = listing();
        ListingQuery::from_inputs("lite", "", "featured").apply(&mut cards);
        assert_eq!(ids(&cards), vec!["a", "b", "d", "e", "c"]);

        ListingQuery::from_inputs("", "", "featured").apply(&mut cards);
        assert_eq!(ids(&cards), vec!["a", "b", "d", "e", "c"]);
        assert!(cards.iter().all(Listed::is_visible));
    }

    #[test]
    fn test_price_desc() {
        let mut cards = listing();
        ListingQuery::new()
            .with_sort(SortOption::PriceDesc)
            .apply(&mut cards);
        assert_eq!(ids(&cards), vec!["a", "c", "b", "d", "e"]);
    }

    #[test]
    fn test_name_sorts_ignore_case() {
        let mut cards = listing();
        ListingQuery::from_inputs("", "", "name_asc").apply(&mut cards);
        assert_eq!(ids(&cards), vec!["b", "e", "c", "a", "d"]);

        ListingQuery::from_inputs("", "", "name_desc").apply(&mut cards);
        assert_eq!(ids(&cards), vec!["d", "a", "c", "e", "b"]);
    }

    #[test]
    fn test_featured_keeps_current_order() {
        let mut cards = listing();
        ListingQuery::from_inputs("", "", "price_asc").apply(&mut cards);
        let sorted: Vec<String> = ids(&cards).into_iter().map(String::from).collect();

        ListingQuery::from_inputs("", "", "featured").apply(&mut cards);
        assert_eq!(ids(&cards), sorted);
    }

    #[test]
    fn test_refilter_shows_hidden_items_again() {
        let mut cards = listing();
        ListingQuery::from_inputs("souris", "", "").apply(&mut cards);
        assert_eq!(visible_ids(&cards), vec!["d"]);

        let summary = ListingQuery::from_inputs("", "", "").apply(&mut cards);
        assert_eq!(summary.hidden, 0);
        assert!(cards.iter().all(Listed::is_visible));
    }

    #[test]
    fn test_unparseable_price_is_always_hidden() {
        let mut cards = listing();
        cards[0].attrs.price = Some("sur devis".into());
        ListingQuery::new().apply(&mut cards);
        assert!(!cards[0].is_visible());
    }
}
