//! Scripted event replay.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::ProductAttributes;
use vitrine_widget::{Patches, Storefront, UiEvent};

use super::{load_listing, ReplayArgs};
use crate::context::Context;
use crate::output::describe_patch;

/// A replay script.
#[derive(Debug, Deserialize)]
pub struct ReplayScript {
    /// Footer year; the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Product elements in markup order.
    #[serde(default)]
    pub products: Vec<ProductAttributes>,
    /// Events, in the order the page would see them.
    pub events: Vec<UiEvent>,
}

impl ReplayScript {
    /// Read a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse replay script: {}", path.display()))
    }
}

/// What one event produced.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub event: UiEvent,
    pub patches: Patches,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Replay `events` in order, collecting one report per event. `on_step`
/// sees each report as soon as its event has been handled.
///
/// A faulty event is reported and the replay goes on, as it would on a
/// live page.
pub fn replay(
    store: &mut Storefront,
    events: Vec<UiEvent>,
    mut on_step: impl FnMut(&StepReport),
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(events.len());

    for event in events {
        let report = match store.dispatch(&event) {
            Ok(dispatch) => StepReport {
                event,
                patches: dispatch.patches,
                notice: dispatch.notice.map(|n| n.message()),
                error: None,
            },
            Err(err) => StepReport {
                event,
                patches: Patches::new(),
                notice: None,
                error: Some(err.to_string()),
            },
        };
        on_step(&report);
        reports.push(report);
    }

    reports
}

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script = ReplayScript::load(&ctx.resolve_path(&args.script))?;
    let products = match &args.listing {
        Some(listing) => load_listing(&ctx.resolve_path(listing))?,
        None => script.products,
    };

    let mut store = Storefront::new(ctx.config.clone(), products);
    match script.year {
        Some(year) => store.startup_at(year),
        None => store.startup(),
    };

    let total = script.events.len();
    let progress = ctx.output.progress(total as u64, "Replaying");
    let reports = replay(&mut store, script.events, |_| progress.inc(1));
    progress.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    ctx.output.header(&format!("Replay: {} event(s)", total));

    for (i, report) in reports.iter().enumerate() {
        let label = serde_json::to_string(&report.event)?;
        ctx.output.step(
            i + 1,
            total,
            &format!("{} -> {} patch(es)", label, report.patches.len()),
        );

        if args.patches {
            for patch in report.patches.iter() {
                ctx.output.list_item(&describe_patch(patch));
            }
        }
        if let Some(notice) = &report.notice {
            ctx.output.info(&notice.replace('\n', " "));
        }
        if let Some(error) = &report.error {
            ctx.output.warn(&format!("Aborted: {}", error));
        }
    }

    print_cart(&store, ctx);

    Ok(())
}

fn print_cart(store: &Storefront, ctx: &Context) {
    ctx.output.header("Cart");

    let pricing = store.cart().calculate_pricing();
    if pricing.line_items.is_empty() {
        ctx.output.info("Empty.");
        return;
    }

    ctx.output.table_row(&["PRODUCT", "QTY", "SUBTOTAL"], &[24, 5, 16]);
    for line in &pricing.line_items {
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.quantity.to_string(),
                &line.subtotal.display(),
            ],
            &[24, 5, 16],
        );
    }

    ctx.output.info("");
    ctx.output.kv("Items", &pricing.total_quantity.to_string());
    ctx.output.kv("Total", &pricing.grand_total.display());
    if pricing.has_invalid_prices() {
        ctx.output.warn("Some products carry an unparseable price.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_widget::WidgetConfig;

    const SCRIPT: &str = r#"{
        "year": 2026,
        "products": [
            {"id": "ps5", "name": "PlayStation 5", "brand": "Sony", "price": "499.99"},
            {"name": "Sans id", "price": "1"}
        ],
        "events": [
            {"type": "click", "region": "card:0:add"},
            {"type": "click", "region": "card:1:add"},
            {"type": "key_down", "key": "Escape"},
            {"type": "click", "region": "checkout"}
        ]
    }"#;

    #[test]
    fn test_replay_reports_each_event() {
        let script: ReplayScript = serde_json::from_str(SCRIPT).unwrap();
        let mut store = Storefront::new(WidgetConfig::default(), script.products);
        store.startup_at(2026);

        let mut aborted = Vec::new();
        let reports = replay(&mut store, script.events, |step| {
            aborted.push(step.error.is_some())
        });
        assert_eq!(aborted, vec![false, true, false, false]);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].patches.text_of("cartCount"), Some("1"));
        assert_eq!(
            reports[1].error.as_deref(),
            Some("Product has no identifier")
        );
        assert!(!store.is_cart_open());
        assert_eq!(
            reports[3].notice.as_deref(),
            Some("Commande validée pour un total de 499,99\u{a0}\u{20ac} !\n(Ceci est une démo)")
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_script_file_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        fs::write(&path, "[]").unwrap();

        let err = ReplayScript::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse replay script"));
    }
}
