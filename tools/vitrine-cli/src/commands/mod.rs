//! CLI command implementations.

pub mod config;
pub mod render;
pub mod replay;

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use vitrine_commerce::catalog::ProductAttributes;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Listing snapshot (JSON array of product attributes).
    pub listing: String,

    /// Footer year (default: current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Print the product grid markup.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Replay script (JSON with `products` and `events`).
    pub script: String,

    /// Listing snapshot to use instead of the script's products.
    #[arg(short, long)]
    pub listing: Option<String>,

    /// Print every patch, not just the count.
    #[arg(short, long)]
    pub patches: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Read a listing snapshot.
pub fn load_listing(path: &Path) -> Result<Vec<ProductAttributes>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing: {}", path.display()))?;
    ProductAttributes::list_from_json(&content)
        .with_context(|| format!("Failed to parse listing: {}", path.display()))
}
