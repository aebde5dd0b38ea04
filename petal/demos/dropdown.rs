//! Dropdown Example
//!
//! The dropdown's extension points, one section each:
//! - multi-select with a change callback
//! - a custom item renderer (check marks and a price column)
//! - a custom selection summary
//! - a searchable body with the fuzzy filter
//!
//! Clicks and query edits are replayed through the handler registry, the
//! tree is rendered after each step.

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::LevelFilter;
use petal::prelude::*;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

const PRICED_FRUITS: &str = r#"[
    {"sku": 101, "name": "Apple", "price": "0.40"},
    {"sku": 102, "name": "Banana", "price": "0.25"},
    {"sku": 103, "name": "Blueberry", "price": "3.10"},
    {"sku": 104, "name": "Cherry", "price": "4.50"},
    {"sku": 105, "name": "Dragon fruit", "price": "2.80"}
]"#;

fn show(title: &str, root: &Element, theme: &WidgetTheme) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "── {title} ──")?;
    petaldom::render_styled(root, theme, &mut out)?;
    writeln!(out)?;
    writeln!(out)
}

/// Row with a check mark and the price right of the name.
fn priced_item(props: &DropdownItemProps<'_>, registry: &HandlerRegistry) -> Element {
    let mark = if props.is_selected() { "✓" } else { " " };
    let price = props
        .item_data
        .get("price")
        .and_then(|p| p.as_str())
        .unwrap_or("-");

    let row = Element::row()
        .id(&props.element_id)
        .class("list-item")
        .gap(1)
        .clickable(true)
        .children([
            Element::text(mark),
            Element::text(format!("{:<14}", props.item_data.name())),
            Element::text(format!("${price}")).style(Style::new().dim()),
        ]);

    if let Some(id) = props.identifier() {
        registry.register(&props.element_id, "on_activate", props.select_item.handler(id));
    }
    row
}

/// Comma separated names instead of a count.
fn name_summary(summary: &SelectionSummary<'_>) -> Element {
    let text = if summary.selected_items.is_empty() {
        summary.no_selection_label.to_string()
    } else {
        summary
            .selected_items
            .iter()
            .map(|option| option.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    Element::row()
        .gap(1)
        .child(Element::text(text))
        .child(Element::text("▾"))
}

fn run(theme: &WidgetTheme) -> Result<(), Box<dyn std::error::Error>> {
    let fruits = OptionRecord::list_from_json(PRICED_FRUITS)?;
    let form = Form::new().validator(
        Validator::new()
            .field("basket")
            .min_selected(2, "Pick at least two fruits")
            .build(),
    );

    let closed = Arc::new(AtomicUsize::new(0));
    let closed_count = Arc::clone(&closed);
    let basket = DropdownState::new();
    let favourite = DropdownState::with_modal(InlineModal::new().on_hide(move || {
        closed_count.fetch_add(1, Ordering::SeqCst);
    }));
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        Element::col().gap(1).children([
            Dropdown::new("basket")
                .label("Basket")
                .options(fruits.clone())
                .id_attribute("sku")
                .multi_select(true)
                .item(priced_item)
                .render_selection_summary(name_summary)
                .no_selection_label("Empty basket")
                .on_change(|ids| log::info!("basket is now {ids:?}"))
                .sink(form.sink())
                .state(&basket)
                .build(registry),
            Dropdown::new("favourite")
                .label("Favourite")
                .options(fruits.clone())
                .id_attribute("sku")
                .value(103_i64)
                .searchable()
                .sink(form.sink())
                .state(&favourite)
                .build(registry),
        ])
    };

    show("Closed", &render(&registry), theme)?;

    registry.activate("basket-activator");
    registry.activate("basket-opt-0");
    show("Basket open, one pick", &render(&registry), theme)?;

    if let Err(e) = form.submit() {
        log::warn!("{e}");
    }

    registry.activate("basket-opt-3");
    registry.activate("basket-opt-0");
    show("Basket after three clicks", &render(&registry), theme)?;

    registry.activate("favourite-activator");
    show("Favourite open", &render(&registry), theme)?;
    registry.change_text("favourite-search", "bry");
    show("Favourite searching \"bry\"", &render(&registry), theme)?;

    registry.activate("favourite-opt-2");
    show("Favourite picked", &render(&registry), theme)?;
    log::info!("favourite body closed {} time(s)", closed.load(Ordering::SeqCst));

    let data = form.submit()?;
    log::info!("submitted {}", data.to_json()?);
    Ok(())
}

fn main() {
    match std::env::var("PETAL_LOG") {
        Ok(path) => {
            if let Ok(log_file) = File::create(path) {
                let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
            }
        }
        Err(_) => {
            let _ = TermLogger::init(
                LevelFilter::Info,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            );
        }
    }

    if let Err(e) = run(&WidgetTheme::new()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
