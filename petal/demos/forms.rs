//! Forms Example
//!
//! One story per form widget, each wired to a `Form`:
//! - Simple usage (email + password, validated)
//! - Text input and textarea
//! - Checkboxes
//! - Radio list
//! - Dropdown over a fruit list
//! - Range slider
//!
//! Each story renders its form, replays a few clicks and edits through the
//! handler registry, renders again and submits.
//!
//!     cargo run --example forms -- [simple|input|textarea|checkbox|radio|dropdown|slider]
//!
//! Without an argument every story runs. Set `PETAL_LOG=forms.log` to write a
//! debug log to a file instead of logging to the terminal.

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};

use log::LevelFilter;
use petal::prelude::*;
use petal::render_errors;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

type DemoResult = Result<(), Box<dyn Error>>;

const FRUITS_LIST: &str = r#"[
    {"id": "APPLE", "name": "Apple"},
    {"id": "BANANA", "name": "Banana"},
    {"id": "CHERRY", "name": "Cherry"},
    {"id": "GRAPES", "name": "Grapes"},
    {"id": "MANGO", "name": "Mango"},
    {"id": "ORANGE", "name": "Orange"},
    {"id": "PINEAPPLE", "name": "Pineapple"}
]"#;

const STORIES: &[(&str, fn(&WidgetTheme) -> DemoResult)] = &[
    ("simple", simple_usage),
    ("input", text_input),
    ("textarea", textarea),
    ("checkbox", checkbox),
    ("radio", radio_list),
    ("dropdown", dropdown),
    ("slider", range_slider),
];

// ============================================================================
// Helpers
// ============================================================================

fn show(title: &str, root: &Element, theme: &WidgetTheme) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "── {title} ──")?;
    petaldom::render_styled(root, theme, &mut out)?;
    writeln!(out)?;
    writeln!(out)
}

fn submit_button(form: &Form, registry: &HandlerRegistry, label: &str) -> Element {
    let form = form.clone();
    Button::new(label)
        .id("submit")
        .appearance(ButtonAppearance::Primary)
        .class_name("full-width-btn")
        .on_activate(move || match form.submit() {
            Ok(data) => match data.to_json() {
                Ok(json) => log::info!("Submitted data: {json}"),
                Err(e) => log::error!("could not serialize form data: {e}"),
            },
            Err(e) => log::warn!("{e}"),
        })
        .build(registry)
}

fn form_column(fields: impl IntoIterator<Item = Element>) -> Element {
    Element::col().class("form").gap(1).children(fields)
}

// ============================================================================
// Stories
// ============================================================================

fn simple_usage(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new().validator(
        Validator::new()
            .field("userEmail")
            .required("Email is required")
            .email("Please enter a valid email")
            .field("password")
            .required("Password is required")
            .build(),
    );
    let email = State::new(String::new());
    let password = State::new(String::new());
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            Input::new("userEmail")
                .label("Enter Email")
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&email)
                .build(registry),
            Input::new("password")
                .password()
                .label("Enter Password")
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&password)
                .build(registry),
            submit_button(&form, registry, "Log In"),
        ])
    };

    show("Simple Usage", &render(&registry), theme)?;

    registry.change_text("userEmail", "ada@");
    registry.activate("submit");
    if let ValidationResult::Invalid(errors) = form.validate() {
        show("Simple Usage (rejected)", &render_errors(&errors), theme)?;
    }

    registry.change_text("userEmail", "ada@example.com");
    registry.change_text("password", "hunter2");
    show("Simple Usage (filled)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn text_input(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new();
    let name = State::new(String::new());
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            Input::new("name")
                .label("Name")
                .placeholder("Enter your name")
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&name)
                .build(registry),
            submit_button(&form, registry, "Submit"),
        ])
    };

    show("Text Input", &render(&registry), theme)?;
    registry.change_text("name", "Grace Hopper");
    show("Text Input (typed)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn textarea(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new();
    let description = State::new(String::new());
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            Textarea::new("description")
                .label("Description")
                .placeholder("Enter your description")
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&description)
                .build(registry),
            submit_button(&form, registry, "Submit"),
        ])
    };

    show("Textarea", &render(&registry), theme)?;
    registry.change_text("description", "Two lines\nof description");
    show("Textarea (typed)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn checkbox(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new();
    let fruits = ["orange", "pineapple", "grapes"].map(|name| (name, State::new(false)));
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        let mut fields: Vec<Element> = fruits
            .iter()
            .map(|(name, state)| {
                let mut label = name.to_string();
                label[..1].make_ascii_uppercase();
                Checkbox::new(*name)
                    .label(label)
                    .sink(form.sink())
                    .state(state)
                    .build(registry)
            })
            .collect();
        fields.push(submit_button(&form, registry, "Submit"));
        form_column(fields)
    };

    show("Checkbox", &render(&registry), theme)?;
    registry.activate("orange");
    registry.activate("grapes");
    show("Checkbox (two checked)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn radio_list(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new();
    let answer = State::<Option<Identifier>>::new(None);
    let options = [OptionRecord::new("YES", "Yes"), OptionRecord::new("NO", "No")];
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            RadioList::new("yesNoOption")
                .label("Are you sure?")
                .options(options.clone())
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&answer)
                .build(registry),
            submit_button(&form, registry, "Submit"),
        ])
    };

    show("RadioList", &render(&registry), theme)?;
    registry.activate("yesNoOption-opt-0");
    show("RadioList (Yes)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn dropdown(theme: &WidgetTheme) -> DemoResult {
    let form = Form::new().on_submit(|data| {
        log::info!("Selected Fruit: {:?}", data.get("fruit"));
    });
    let fruits = OptionRecord::list_from_json(FRUITS_LIST)?;
    let fruit = DropdownState::new();
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            Dropdown::new("fruit")
                .label("Select fruit")
                .options(fruits.clone())
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&fruit)
                .build(registry),
            submit_button(&form, registry, "Submit"),
        ])
    };

    show("Dropdown", &render(&registry), theme)?;
    registry.activate("fruit-activator");
    show("Dropdown (open)", &render(&registry), theme)?;
    registry.activate("fruit-opt-2");
    show("Dropdown (Cherry picked)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn range_slider(theme: &WidgetTheme) -> DemoResult {
    let range = SliderRange::parse_bounds("10", "100")?;
    let default_price = range.default_value(Some(10.0));
    let form = Form::new()
        .with_value("price", FieldValue::Number(default_price))
        .on_submit(|data| log::info!("Selected price: {:?}", data.get("price")));
    let price = SliderState::new();
    let registry = HandlerRegistry::new();

    let render = |registry: &HandlerRegistry| {
        registry.clear();
        form_column([
            RangeSlider::new("price", range)
                .label("Select price range")
                .default_value(default_price)
                .appearance(Appearance::Block)
                .sink(form.sink())
                .state(&price)
                .build(registry),
            submit_button(&form, registry, "Submit"),
        ])
    };

    show("RangeSlider", &render(&registry), theme)?;
    registry.change_value("price", 64.4);
    registry.activate("price-inc");
    show("RangeSlider (moved)", &render(&registry), theme)?;
    registry.activate("submit");
    Ok(())
}

fn init_logging() {
    match std::env::var("PETAL_LOG") {
        Ok(path) => match File::create(&path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
            }
            Err(e) => eprintln!("Cannot create log file {path}: {e}"),
        },
        Err(_) => {
            let _ = TermLogger::init(
                LevelFilter::Info,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            );
        }
    }
}

fn main() {
    init_logging();

    let theme = WidgetTheme::new();
    let wanted = std::env::args().nth(1);

    let stories: Vec<_> = STORIES
        .iter()
        .filter(|(name, _)| wanted.as_deref().is_none_or(|w| w == *name))
        .collect();

    if stories.is_empty() {
        let names: Vec<&str> = STORIES.iter().map(|(name, _)| *name).collect();
        eprintln!("Unknown story. Available: {}", names.join(", "));
        std::process::exit(2);
    }

    for (name, story) in stories {
        if let Err(e) = story(&theme) {
            eprintln!("Error in {name}: {e}");
            std::process::exit(1);
        }
    }
}
