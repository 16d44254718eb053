//! Configuration management commands.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use vitrine_widget::{HookIds, WidgetConfig};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    ctx.output.info("");

    print!("{}", ctx.config.to_toml_string()?);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("vitrine.toml");

    if config_path.exists() && !force {
        let overwrite = !ctx.output.is_json()
            && console::user_attended()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("vitrine")
        .to_string();

    let config = WidgetConfig {
        name,
        ..WidgetConfig::default()
    };
    fs::write(&config_path, config.to_toml_string()?)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.name.is_empty() {
        warnings.push("name is empty; log entries will carry no widget name".to_string());
    }

    for (field, id) in hook_entries(&ctx.config.hooks) {
        if id.is_empty() {
            errors.push(format!("hooks.{} must not be empty", field));
        }
    }

    for (id, fields) in duplicate_hooks(&ctx.config.hooks) {
        errors.push(format!("hook id '{}' is shared by {}", id, fields.join(", ")));
    }

    let controls = &ctx.config.controls;
    let filters = [controls.search, controls.max_price, controls.sort];
    if filters.iter().any(|&on| on) && !filters.iter().all(|&on| on) {
        warnings.push(
            "search, max_price and sort must all be present for filtering to work".to_string(),
        );
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn hook_entries(hooks: &HookIds) -> Vec<(&'static str, &str)> {
    vec![
        ("cart_open", hooks.cart_open.as_str()),
        ("cart_close", hooks.cart_close.as_str()),
        ("cart_drawer", hooks.cart_drawer.as_str()),
        ("cart_backdrop", hooks.cart_backdrop.as_str()),
        ("cart_items", hooks.cart_items.as_str()),
        ("cart_total", hooks.cart_total.as_str()),
        ("cart_count", hooks.cart_count.as_str()),
        ("checkout", hooks.checkout.as_str()),
        ("clear_cart", hooks.clear_cart.as_str()),
        ("product_grid", hooks.product_grid.as_str()),
        ("modal", hooks.modal.as_str()),
        ("modal_backdrop", hooks.modal_backdrop.as_str()),
        ("modal_close", hooks.modal_close.as_str()),
        ("modal_img", hooks.modal_img.as_str()),
        ("modal_title", hooks.modal_title.as_str()),
        ("modal_desc", hooks.modal_desc.as_str()),
        ("modal_price", hooks.modal_price.as_str()),
        ("modal_add", hooks.modal_add.as_str()),
        ("search_input", hooks.search_input.as_str()),
        ("sort_select", hooks.sort_select.as_str()),
        ("max_price", hooks.max_price.as_str()),
        ("year", hooks.year.as_str()),
    ]
}

fn duplicate_hooks(hooks: &HookIds) -> Vec<(String, Vec<&'static str>)> {
    let mut by_id: BTreeMap<&str, Vec<&'static str>> = BTreeMap::new();
    for (field, id) in hook_entries(hooks) {
        if !id.is_empty() {
            by_id.entry(id).or_default().push(field);
        }
    }

    by_id
        .into_iter()
        .filter(|(_, fields)| fields.len() > 1)
        .map(|(id, fields)| (id.to_string(), fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hooks_are_distinct() {
        assert!(duplicate_hooks(&HookIds::default()).is_empty());
    }

    #[test]
    fn test_duplicate_hooks_reported() {
        let hooks = HookIds {
            cart_total: "total".to_string(),
            modal_price: "total".to_string(),
            ..HookIds::default()
        };

        assert_eq!(
            duplicate_hooks(&hooks),
            vec![("total".to_string(), vec!["cart_total", "modal_price"])]
        );
    }
}
