//! The product listing.
//!
//! The listing is the data sequence behind the product grid. Filtering and
//! sorting work on this sequence and the grid is redrawn from it, so every
//! element keeps its [`CardKey`] however often it moves.

use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::{Product, ProductAttributes};
use vitrine_commerce::search::{Listed, ListingQuery, ListingSummary};
use vitrine_commerce::ProductId;

use crate::error::WidgetError;
use crate::html::html_escape;
use crate::region::{Affordance, CardKey, Region};

/// One product element of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Stable key, used in region tags.
    pub key: CardKey,
    /// Attributes as authored in the markup.
    pub attrs: ProductAttributes,
    /// Whether the element is shown.
    pub visible: bool,
}

impl ProductCard {
    /// Read the product this element describes.
    pub fn product(&self) -> Result<Product, WidgetError> {
        Ok(Product::read(&self.attrs)?)
    }

    /// Markup for this element.
    pub fn render_html(&self) -> String {
        let attr = |value: &Option<String>| html_escape(value.as_deref().unwrap_or_default());

        let image = match self.attrs.image.as_deref() {
            Some(src) => format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                html_escape(src),
                html_escape(self.attrs.name())
            ),
            None => String::new(),
        };

        let description = match self.attrs.description.as_deref() {
            Some(text) => format!(r#"<p class="desc">{}</p>"#, html_escape(text)),
            None => String::new(),
        };

        format!(
            r#"<article class="card product" data-id="{}" data-name="{}" data-brand="{}" data-price="{}" data-region="{}"{}>
    {}
    <h3 class="title">{}</h3>
    <p class="brand">{}</p>
    {}
    <p class="price">{}</p>
    <div class="actions">
        <button class="btn add" data-region="{}">Ajouter</button>
        <button class="btn ghost details" data-region="{}">Détails</button>
    </div>
</article>"#,
            attr(&self.attrs.id),
            attr(&self.attrs.name),
            attr(&self.attrs.brand),
            attr(&self.attrs.price),
            Region::card(self.key).tag(),
            if self.visible {
                ""
            } else {
                r#" style="display: none;""#
            },
            image,
            html_escape(self.attrs.name()),
            html_escape(self.attrs.brand()),
            description,
            self.attrs.price().display(),
            Region::affordance(self.key, Affordance::Add).tag(),
            Region::affordance(self.key, Affordance::Details).tag(),
        )
    }
}

impl Listed for ProductCard {
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

/// The product elements in grid order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    cards: Vec<ProductCard>,
}

impl Listing {
    /// Build the listing from elements in markup order. All start visible.
    pub fn from_attributes(attrs: impl IntoIterator<Item = ProductAttributes>) -> Self {
        let cards = attrs
            .into_iter()
            .enumerate()
            .map(|(i, attrs)| ProductCard {
                key: CardKey(i),
                attrs,
                visible: true,
            })
            .collect();
        Self { cards }
    }

    /// Look up an element by key.
    pub fn card(&self, key: CardKey) -> Result<&ProductCard, WidgetError> {
        self.cards
            .iter()
            .find(|c| c.key == key)
            .ok_or(WidgetError::UnknownCard(key.0))
    }

    /// Elements in grid order.
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ids of the visible elements in grid order. Elements without an id
    /// are skipped.
    pub fn visible_ids(&self) -> Vec<ProductId> {
        self.cards
            .iter()
            .filter(|c| c.visible)
            .filter_map(|c| c.attrs.id.as_deref().map(ProductId::new))
            .collect()
    }

    /// Recompute visibility and order from scratch.
    pub fn apply(&mut self, query: &ListingQuery) -> ListingSummary {
        query.apply(&mut self.cards)
    }

    /// Markup for the whole grid.
    pub fn render_html(&self) -> String {
        self.cards
            .iter()
            .map(ProductCard::render_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::search::SortOption;

    fn listing() -> Listing {
        Listing::from_attributes([
            ProductAttributes::new("e", "Écran", "Dell", "300"),
            ProductAttributes::new("b", "Phone B", "Acme", "200"),
            ProductAttributes::new("c", "Casque", "Sony", "150"),
        ])
    }

    #[test]
    fn test_keys_follow_markup_order() {
        let listing = listing();
        let keys: Vec<usize> = listing.cards().iter().map(|c| c.key.0).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(listing.card(CardKey(1)).unwrap().attrs.name(), "Phone B");
        assert_eq!(listing.card(CardKey(9)), Err(WidgetError::UnknownCard(9)));
    }

    #[test]
    fn test_keys_survive_sorting() {
        let mut listing = listing();
        listing.apply(&ListingQuery::new().with_sort(SortOption::PriceAsc));

        let ids: Vec<String> = listing.visible_ids().into_iter().map(|i| i.into_inner()).collect();
        assert_eq!(ids, vec!["c", "b", "e"]);
        assert_eq!(listing.card(CardKey(0)).unwrap().attrs.id.as_deref(), Some("e"));
    }

    #[test]
    fn test_hidden_card_markup() {
        let mut listing = listing();
        listing.apply(&ListingQuery::from_inputs("phone", "", "featured"));

        let html = listing.render_html();
        assert!(html.contains(r#"data-id="e" data-name="Écran" data-brand="Dell" data-price="300" data-region="card:0" style="display: none;""#));
        assert!(html.contains(r#"data-region="card:1">"#));
        assert!(html.contains(r#"data-region="card:1:add""#));
        assert!(html.contains(r#"data-region="card:2:details""#));
    }

    #[test]
    fn test_card_markup_is_escaped() {
        let listing = Listing::from_attributes([ProductAttributes::new(
            "x",
            "<b>Gras</b>",
            "A&B",
            "10",
        )
        .with_description("\"quoted\"")]);

        let html = listing.render_html();
        assert!(html.contains("&lt;b&gt;Gras&lt;/b&gt;"));
        assert!(html.contains("A&amp;B"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("10,00\u{a0}\u{20ac}"));
    }
}
