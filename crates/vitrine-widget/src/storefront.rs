//! The storefront widget.
//!
//! [`Storefront`] owns all widget state: the cart, the panel and modal
//! state, the listing and the filter field values. The host feeds it events
//! and applies the patches it returns.

use chrono::{Datelike, Local};
use vitrine_commerce::cart::Cart;
use vitrine_commerce::catalog::{Product, ProductAttributes};
use vitrine_commerce::search::ListingQuery;
use vitrine_commerce::{ProductId, SessionId};
use vitrine_observability::StructuredLogger;

use crate::cart_view::CartView;
use crate::config::{HookIds, OptionalControls, WidgetConfig};
use crate::error::WidgetError;
use crate::intent::{resolve, Field, Intent, UiEvent};
use crate::listing::Listing;
use crate::modal::ModalController;
use crate::patch::{Patch, Patches, BODY};

/// A blocking dialog the host must show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Checkout went through for `total`.
    OrderConfirmed { total: String },
    /// Checkout was attempted on an empty cart.
    EmptyCart,
}

impl Notice {
    /// Dialog text.
    pub fn message(&self) -> String {
        match self {
            Notice::OrderConfirmed { total } => format!(
                "Commande validée pour un total de {} !\n(Ceci est une démo)",
                total
            ),
            Notice::EmptyCart => "Ton panier est vide !".to_string(),
        }
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Writes to apply, in order.
    pub patches: Patches,
    /// Dialog to show after applying them.
    pub notice: Option<Notice>,
}

impl From<Patches> for Dispatch {
    fn from(patches: Patches) -> Self {
        Self {
            patches,
            notice: None,
        }
    }
}

/// Current values of the filter controls. `None` marks a control the page
/// does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInputs {
    pub search: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

impl FilterInputs {
    /// Initial values for the controls present on the page.
    pub fn for_controls(controls: &OptionalControls) -> Self {
        let present = |on: bool, value: &str| on.then(|| value.to_string());
        Self {
            search: present(controls.search, ""),
            max_price: present(controls.max_price, ""),
            sort: present(controls.sort, "featured"),
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Search => self.search.as_mut(),
            Field::MaxPrice => self.max_price.as_mut(),
            Field::Sort => self.sort.as_mut(),
        }
    }

    /// Build the listing query. Every control must be present.
    pub fn query(&self) -> Result<ListingQuery, WidgetError> {
        let search = self.search.as_deref().ok_or(WidgetError::MissingHook("search"))?;
        let max_price = self
            .max_price
            .as_deref()
            .ok_or(WidgetError::MissingHook("max_price"))?;
        let sort = self.sort.as_deref().ok_or(WidgetError::MissingHook("sort"))?;
        Ok(ListingQuery::from_inputs(search, max_price, sort))
    }
}

/// The storefront widget state.
#[derive(Debug)]
pub struct Storefront {
    config: WidgetConfig,
    cart: Cart,
    cart_open: bool,
    modal: ModalController,
    listing: Listing,
    inputs: FilterInputs,
    logger: StructuredLogger,
}

impl Storefront {
    /// Create the widget over a listing, given in markup order.
    pub fn new(config: WidgetConfig, products: impl IntoIterator<Item = ProductAttributes>) -> Self {
        let logger = StructuredLogger::new(SessionId::generate().into_inner())
            .with_widget(config.name.clone())
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Self {
            inputs: FilterInputs::for_controls(&config.controls),
            listing: Listing::from_attributes(products),
            cart: Cart::new(),
            cart_open: false,
            modal: ModalController::new(),
            logger,
            config,
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    fn hooks(&self) -> &HookIds {
        &self.config.hooks
    }

    /// Initial render, stamping the footer with the current year.
    pub fn startup(&mut self) -> Patches {
        self.startup_at(Local::now().year())
    }

    /// Initial render with an explicit footer year.
    pub fn startup_at(&mut self, year: i32) -> Patches {
        let mut patches = self.render_cart();
        patches.extend(self.panel_patches());
        patches.extend(self.modal.patches(self.hooks()));

        // No listing pass until a filter control changes.
        patches.push(Patch::html(
            &self.config.hooks.product_grid,
            self.listing.render_html(),
        ));

        if self.config.controls.year {
            patches.push(Patch::text(&self.config.hooks.year, year.to_string()));
        }

        self.logger
            .info_builder("storefront started")
            .field_u64("products", self.listing.len() as u64)
            .emit();

        patches
    }

    /// Handle an event, logging and dropping any fault.
    ///
    /// A faulty event leaves the widget exactly as it was.
    pub fn handle(&mut self, event: &UiEvent) -> Dispatch {
        match self.dispatch(event) {
            Ok(dispatch) => dispatch,
            Err(err) => {
                self.logger
                    .warn_builder("event handler aborted")
                    .field("error", err.to_string())
                    .emit();
                Dispatch::default()
            }
        }
    }

    /// Handle an event.
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<Dispatch, WidgetError> {
        let intent = resolve(event, &self.listing, &self.config.controls)?;
        self.apply(intent)
    }

    /// Carry out a resolved intent.
    pub fn apply(&mut self, intent: Intent) -> Result<Dispatch, WidgetError> {
        let dispatch: Dispatch = match intent {
            Intent::AddToCart(product) => self.add_to_cart(product).into(),
            Intent::ViewDetails(product) => self.open_modal(product).into(),
            Intent::RemoveFromCart(id) => self.remove_from_cart(&id).into(),
            Intent::OpenCart => self.open_cart().into(),
            Intent::CloseCart => self.close_cart().into(),
            Intent::CloseModal => self.close_modal().into(),
            Intent::ModalAdd => self.modal_add().into(),
            Intent::Checkout => self.checkout(),
            Intent::ClearCart => self.clear_cart().into(),
            Intent::SetField {
                field,
                value,
                refresh,
            } => self.set_field(field, value, refresh)?.into(),
            Intent::DismissOverlays => self.dismiss_overlays().into(),
            Intent::None => Dispatch::default(),
        };
        Ok(dispatch)
    }

    /// Put one unit of `product` in the cart and open the panel.
    pub fn add_to_cart(&mut self, product: Product) -> Patches {
        let quantity = self.cart.add_item(
            product.id.clone(),
            product.title,
            product.price,
            product.image,
        );

        self.logger
            .for_component("cart")
            .info_builder("cart item added")
            .field("product_id", product.id.as_str())
            .field_u64("quantity", u64::from(quantity))
            .field_u64("cart_size", self.cart.item_count())
            .emit();

        let mut patches = self.render_cart();
        patches.extend(self.open_cart());
        patches
    }

    /// Drop the whole line for `id`. The panel stays as it is.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Patches {
        let removed = self.cart.remove_item(id);

        self.logger
            .for_component("cart")
            .info_builder("cart item removed")
            .field("product_id", id.as_str())
            .field_bool("removed", removed)
            .field_u64("cart_size", self.cart.item_count())
            .emit();

        self.render_cart()
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Patches {
        let lines = self.cart.unique_item_count();
        self.cart.clear();

        self.logger
            .for_component("cart")
            .info_builder("cart cleared")
            .field_u64("lines", lines as u64)
            .emit();

        self.render_cart()
    }

    /// Show the cart panel and lock page scrolling.
    pub fn open_cart(&mut self) -> Patches {
        self.cart_open = true;
        self.panel_patches()
    }

    /// Hide the cart panel and release page scrolling.
    pub fn close_cart(&mut self) -> Patches {
        self.cart_open = false;
        self.panel_patches()
    }

    /// Show `product` in the modal.
    pub fn open_modal(&mut self, product: Product) -> Patches {
        self.logger
            .for_component("modal")
            .debug_builder("modal opened")
            .field("product_id", product.id.as_str())
            .emit();

        self.modal.open(product);
        self.modal.patches(self.hooks())
    }

    pub fn close_modal(&mut self) -> Patches {
        self.modal.close();
        self.modal.patches(self.hooks())
    }

    /// Add the modal's product to the cart, then close the modal. Ignored
    /// while the modal is closed.
    pub fn modal_add(&mut self) -> Patches {
        let Some(product) = self.modal.add_target().cloned() else {
            return Patches::new();
        };

        let mut patches = self.add_to_cart(product);
        patches.extend(self.close_modal());
        patches
    }

    /// Close the cart panel and the modal, whatever their state.
    pub fn dismiss_overlays(&mut self) -> Patches {
        let mut patches = self.close_cart();
        patches.extend(self.close_modal());
        patches
    }

    /// Run the demo checkout.
    pub fn checkout(&mut self) -> Dispatch {
        if self.cart.is_empty() {
            return Dispatch {
                patches: Patches::new(),
                notice: Some(Notice::EmptyCart),
            };
        }

        let total = self.cart.total_price().display();

        self.logger
            .for_component("cart")
            .info_builder("checkout completed")
            .field("total", total.clone())
            .field_u64("items", self.cart.item_count())
            .emit();

        self.cart.clear();
        let mut patches = self.render_cart();
        patches.extend(self.close_cart());

        Dispatch {
            patches,
            notice: Some(Notice::OrderConfirmed { total }),
        }
    }

    fn set_field(&mut self, field: Field, value: String, refresh: bool) -> Result<Patches, WidgetError> {
        let mut inputs = self.inputs.clone();
        match inputs.slot_mut(field) {
            Some(slot) => *slot = value,
            None => return Ok(Patches::new()),
        }

        let patches = if refresh {
            let query = inputs.query()?;
            self.render_listing(&query)
        } else {
            Patches::new()
        };

        self.inputs = inputs;
        Ok(patches)
    }

    fn render_listing(&mut self, query: &ListingQuery) -> Patches {
        let summary = self.listing.apply(query);

        self.logger
            .for_component("listing")
            .debug_builder("listing updated")
            .field("query", query.filter.query.clone())
            .field("sort", query.sort.as_str())
            .field_u64("visible", summary.visible as u64)
            .field_u64("hidden", summary.hidden as u64)
            .emit();

        Patches::from(vec![Patch::html(
            &self.config.hooks.product_grid,
            self.listing.render_html(),
        )])
    }

    fn render_cart(&self) -> Patches {
        CartView::render(&self.cart).patches(self.hooks())
    }

    fn panel_patches(&self) -> Patches {
        let hooks = self.hooks();
        let open = self.cart_open;
        Patches::from(vec![
            Patch::hidden(&hooks.cart_drawer, !open),
            Patch::hidden(&hooks.cart_backdrop, !open),
            Patch::style(BODY, "overflow", if open { "hidden" } else { "" }),
        ])
    }
}
