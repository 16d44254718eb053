//! Startup rendering.

use anyhow::Result;
use vitrine_widget::Storefront;

use super::{load_listing, RenderArgs};
use crate::context::Context;
use crate::output::describe_patch;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.listing);
    let products = load_listing(&path)?;
    ctx.output.debug(&format!("Loaded {} product(s) from {}", products.len(), path.display()));

    let mut store = Storefront::new(ctx.config.clone(), products);
    let patches = match args.year {
        Some(year) => store.startup_at(year),
        None => store.startup(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&patches);
        return Ok(());
    }

    ctx.output.header(&format!("Startup render: {}", ctx.config.name));
    ctx.output.kv("Products", &store.listing().len().to_string());
    ctx.output.kv("Patches", &patches.len().to_string());
    ctx.output.info("");

    for patch in patches.iter() {
        ctx.output.list_item(&describe_patch(patch));
    }

    if args.html {
        if let Some(html) = patches.html_of(&ctx.config.hooks.product_grid) {
            println!("\n{}", html);
        }
    }

    Ok(())
}
