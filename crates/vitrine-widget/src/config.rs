//! Widget configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_observability::{LogFormat, LogLevel};

/// Widget configuration file.
///
/// Every section is optional; an empty file describes the stock storefront
/// page with every control present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Widget name, attached to every log entry.
    pub name: String,

    /// Element ids the widget reads from and writes to.
    pub hooks: HookIds,

    /// Which optional controls the page carries.
    pub controls: OptionalControls,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            name: "vitrine".to_string(),
            hooks: HookIds::default(),
            controls: OptionalControls::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON config text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Element ids of the storefront page.
///
/// Defaults match the stock page markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HookIds {
    pub cart_open: String,
    pub cart_close: String,
    pub cart_drawer: String,
    pub cart_backdrop: String,
    pub cart_items: String,
    pub cart_total: String,
    pub cart_count: String,
    pub checkout: String,
    pub clear_cart: String,
    pub product_grid: String,
    pub modal: String,
    pub modal_backdrop: String,
    pub modal_close: String,
    pub modal_img: String,
    pub modal_title: String,
    pub modal_desc: String,
    pub modal_price: String,
    pub modal_add: String,
    pub search_input: String,
    pub sort_select: String,
    pub max_price: String,
    pub year: String,
}

impl Default for HookIds {
    fn default() -> Self {
        Self {
            cart_open: "cartOpenBtn".to_string(),
            cart_close: "cartCloseBtn".to_string(),
            cart_drawer: "cartDrawer".to_string(),
            cart_backdrop: "cartBackdrop".to_string(),
            cart_items: "cartItems".to_string(),
            cart_total: "cartTotal".to_string(),
            cart_count: "cartCount".to_string(),
            checkout: "checkoutBtn".to_string(),
            clear_cart: "clearCartBtn".to_string(),
            product_grid: "productGrid".to_string(),
            modal: "modal".to_string(),
            modal_backdrop: "modalBackdrop".to_string(),
            modal_close: "modalCloseBtn".to_string(),
            modal_img: "modalImg".to_string(),
            modal_title: "modalTitle".to_string(),
            modal_desc: "modalDesc".to_string(),
            modal_price: "modalPrice".to_string(),
            modal_add: "modalAddBtn".to_string(),
            search_input: "searchInput".to_string(),
            sort_select: "sortSelect".to_string(),
            max_price: "maxPrice".to_string(),
            year: "year".to_string(),
        }
    }
}

/// Presence of the optional controls.
///
/// A control marked absent makes its feature inert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OptionalControls {
    pub checkout: bool,
    pub clear_cart: bool,
    pub search: bool,
    pub max_price: bool,
    pub sort: bool,
    pub year: bool,
}

impl Default for OptionalControls {
    fn default() -> Self {
        Self {
            checkout: true,
            clear_cart: true,
            search: true,
            max_price: true,
            sort: true,
            year: true,
        }
    }
}

impl OptionalControls {
    /// A page with none of the optional controls.
    pub fn none() -> Self {
        Self {
            checkout: false,
            clear_cart: false,
            search: false,
            max_price: false,
            sort: false,
            year: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
}
