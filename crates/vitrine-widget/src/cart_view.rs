//! Cart panel rendering.
//!
//! The view is a pure function of the cart. Every render replaces the badge,
//! the total and the whole item list.

use vitrine_commerce::cart::Cart;
use vitrine_commerce::ProductId;

use crate::config::HookIds;
use crate::html::html_escape;
use crate::patch::{Patch, Patches};
use crate::region::Region;

/// Placeholder shown when the cart holds nothing.
pub const EMPTY_CART_MESSAGE: &str = "Ton panier est vide.";

/// One row of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    /// Unit price times quantity, e.g. "49,99 € x 2".
    pub unit_line: String,
    /// Formatted line subtotal.
    pub subtotal: String,
    /// Region of the row's removal control.
    pub remove: Region,
}

impl CartRow {
    fn render_html(&self) -> String {
        format!(
            r#"<div class="cart-item" data-id="{}">
    <img src="{}" alt="{}">
    <div>
        <p class="cart-item-title">{}</p>
        <p class="muted">{}</p>
    </div>
    <div class="cart-item-right">
        <p>{}</p>
        <button class="btn ghost" data-region="{}">Retirer</button>
    </div>
</div>"#,
            html_escape(self.id.as_str()),
            html_escape(&self.image),
            html_escape(&self.title),
            html_escape(&self.title),
            html_escape(&self.unit_line),
            html_escape(&self.subtotal),
            html_escape(&self.remove.tag()),
        )
    }
}

/// Rendered state of the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Total quantity, shown on the header badge.
    pub badge: String,
    /// Formatted grand total.
    pub total: String,
    pub rows: Vec<CartRow>,
}

impl CartView {
    /// Render the cart.
    pub fn render(cart: &Cart) -> Self {
        let pricing = cart.calculate_pricing();

        let rows = cart
            .items
            .iter()
            .zip(&pricing.line_items)
            .map(|(item, line)| CartRow {
                id: item.id.clone(),
                title: item.title.clone(),
                image: item.image.clone(),
                unit_line: line.unit_line(),
                subtotal: line.subtotal.display(),
                remove: Region::CartRemove(item.id.clone()),
            })
            .collect();

        Self {
            badge: pricing.total_quantity.to_string(),
            total: pricing.grand_total.display(),
            rows,
        }
    }

    /// Markup for the item list.
    pub fn items_html(&self) -> String {
        if self.rows.is_empty() {
            return format!(
                r#"<div class="empty">
    <span aria-hidden="true">🛒</span>
    <p class="muted">{}</p>
</div>"#,
                EMPTY_CART_MESSAGE
            );
        }

        self.rows
            .iter()
            .map(CartRow::render_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes that bring the panel in line with this view.
    pub fn patches(&self, hooks: &HookIds) -> Patches {
        Patches::from(vec![
            Patch::text(&hooks.cart_count, self.badge.clone()),
            Patch::text(&hooks.cart_total, self.total.clone()),
            Patch::html(&hooks.cart_items, self.items_html()),
        ])
    }
}
