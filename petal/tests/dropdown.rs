use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use petal::prelude::*;
use petal::widgets::dropdown::SELECT_ARROW;
use petaldom::{collect_text, find_by_class, find_element, render_plain};

fn fruits() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new("A", "Apple"),
        OptionRecord::new("B", "Banana"),
    ]
}

type SinkLog = Arc<Mutex<Vec<(String, FieldValue)>>>;

fn recording_sink() -> (SharedSink, SinkLog) {
    let log: SinkLog = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&log);
    let sink: SharedSink = Arc::new(move |name: &str, value: FieldValue| {
        writer.lock().unwrap().push((name.to_string(), value));
    });
    (sink, log)
}

fn counting_modal() -> (InlineModal, Arc<AtomicUsize>) {
    let hides = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hides);
    let modal = InlineModal::new().on_hide(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (modal, hides)
}

fn summary_of(root: &Element) -> String {
    let summaries = find_by_class(root, "selection-summary");
    assert_eq!(summaries.len(), 1, "expected one summary element");
    collect_text(summaries[0]).concat()
}

fn ids(values: &[&str]) -> Vec<Identifier> {
    values.iter().map(|v| Identifier::from(*v)).collect()
}

// =============================================================================
// Initial value
// =============================================================================

#[test]
fn test_single_identifier_seeds_one_element_set() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    Dropdown::new("fruit")
        .options(fruits())
        .value("A")
        .state(&state)
        .build(&registry);

    assert_eq!(state.selected(), ids(&["A"]));
}

#[test]
fn test_sequence_seeds_unchanged() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    Dropdown::new("fruit")
        .options(fruits())
        .multi_select(true)
        .value(vec!["B", "A"])
        .state(&state)
        .build(&registry);

    assert_eq!(state.selected(), ids(&["B", "A"]));
}

#[test]
fn test_attaching_state_seeds_before_build() {
    let state = DropdownState::new();

    let _dropdown = Dropdown::new("fruits")
        .options(fruits())
        .multi_select(true)
        .value(vec!["B"])
        .state(&state);

    assert_eq!(state.selected(), ids(&["B"]));
}

#[test]
fn test_reattach_keeps_live_selection() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    Dropdown::new("fruit")
        .options(fruits())
        .value("A")
        .state(&state)
        .select_item("B");
    Dropdown::new("fruit")
        .options(fruits())
        .value("A")
        .state(&state)
        .build(&registry);

    assert_eq!(state.selected(), ids(&["B"]));
}

#[test]
fn test_blank_text_seeds_empty_set() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let root = Dropdown::new("fruit")
        .options(fruits())
        .value("")
        .state(&state)
        .build(&registry);

    assert!(state.selected().is_empty());
    assert_eq!(summary_of(&root), "Select");
}

#[test]
fn test_zero_is_a_real_identifier() {
    assert_eq!(
        SelectionSeed::from(0_i64).normalize(),
        vec![Identifier::Number(0)]
    );
    assert_eq!(SelectionSeed::Empty.normalize(), Vec::<Identifier>::new());
}

#[test]
fn test_seed_applies_once() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    Dropdown::new("fruit")
        .options(fruits())
        .value("A")
        .state(&state)
        .build(&registry);
    Dropdown::new("fruit")
        .options(fruits())
        .value("B")
        .state(&state)
        .build(&registry);

    assert_eq!(state.selected(), ids(&["A"]));
}

// =============================================================================
// Single-select
// =============================================================================

#[test]
fn test_single_select_replaces_and_hides_once() {
    let (modal, hides) = counting_modal();
    let state = DropdownState::with_modal(modal);
    let (sink, log) = recording_sink();

    let dropdown = Dropdown::new("fruit")
        .options(fruits())
        .value("A")
        .sink(sink)
        .state(&state);

    state.modal().show_modal();
    dropdown.select_item("B");

    assert_eq!(state.selected(), ids(&["B"]));
    assert_eq!(hides.load(Ordering::SeqCst), 1);
    assert!(!state.modal().is_open());

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![("fruit".to_string(), FieldValue::Id(Identifier::from("B")))]
    );
}

#[test]
fn test_single_select_on_closed_modal_does_not_fire_hide() {
    let (modal, hides) = counting_modal();
    let state = DropdownState::with_modal(modal);

    Dropdown::new("fruit")
        .options(fruits())
        .state(&state)
        .select_item("A");

    assert_eq!(state.selected(), ids(&["A"]));
    assert_eq!(hides.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Multi-select
// =============================================================================

#[test]
fn test_multi_select_appends_absent_identifier() {
    let state = DropdownState::new();
    let (sink, log) = recording_sink();

    let dropdown = Dropdown::new("fruits")
        .options(fruits())
        .multi_select(true)
        .value(vec!["B"])
        .sink(sink)
        .state(&state);

    let before = state.selected();
    dropdown.select_item("A");

    assert_eq!(before, ids(&["B"]), "previous set is not mutated");
    assert_eq!(state.selected(), ids(&["B", "A"]));
    assert_eq!(
        *log.lock().unwrap(),
        vec![("fruits".to_string(), FieldValue::Ids(ids(&["B", "A"])))]
    );
}

#[test]
fn test_multi_select_reclick_is_idempotent() {
    let state = DropdownState::new();
    let (sink, log) = recording_sink();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&changes);

    let dropdown = Dropdown::new("fruits")
        .options(fruits())
        .multi_select(true)
        .on_change(move |selection| seen.lock().unwrap().push(selection.to_vec()))
        .sink(sink)
        .state(&state);

    dropdown.select_item("A");
    dropdown.select_item("A");

    assert_eq!(state.selected(), ids(&["A"]));
    // The sink hears only the real change, on_change hears both clicks
    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(*changes.lock().unwrap(), vec![ids(&["A"]), ids(&["A"])]);
}

#[test]
fn test_multi_select_keeps_modal_open() {
    let (modal, hides) = counting_modal();
    let state = DropdownState::with_modal(modal);

    let dropdown = Dropdown::new("fruits")
        .options(fruits())
        .multi_select(true)
        .state(&state);

    state.modal().show_modal();
    dropdown.select_item("A");

    assert!(state.modal().is_open());
    assert_eq!(hides.load(Ordering::SeqCst), 0);
}

#[test]
fn test_select_without_sink() {
    let state = DropdownState::new();
    Dropdown::new("fruit")
        .options(fruits())
        .state(&state)
        .select_item("A");
    assert_eq!(state.selected(), ids(&["A"]));
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn test_summary_omits_unknown_identifiers() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let dropdown = Dropdown::new("fruit")
        .options(fruits())
        .multi_select(true)
        .value(vec!["Z", "B"])
        .state(&state);

    let names: Vec<&str> = dropdown.selected_items().iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["Banana"]);
    assert_eq!(dropdown.summary_text(), "1 selected");

    let root = dropdown.build(&registry);
    assert_eq!(summary_of(&root), "1 selected");
    // Unknown identifiers stay in the set
    assert_eq!(state.selected(), ids(&["Z", "B"]));
}

#[test]
fn test_single_summary_with_only_unknown_identifier() {
    let state = DropdownState::new();
    let dropdown = Dropdown::new("fruit")
        .options(fruits())
        .value("Z")
        .no_selection_label("Pick one")
        .state(&state);

    assert_eq!(dropdown.summary_text(), "Pick one");
}

#[test]
fn test_empty_options_show_no_selection_label() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let root = Dropdown::new("fruit")
        .no_selection_label("Nothing here")
        .state(&state)
        .build(&registry);
    assert_eq!(summary_of(&root), "Nothing here");

    registry.activate("fruit-activator");
    registry.clear();
    let root = Dropdown::new("fruit")
        .no_selection_label("Nothing here")
        .state(&state)
        .build(&registry);

    assert!(find_element(&root, "fruit-list").is_some());
    assert!(find_by_class(&root, "list-item").is_empty());
}

#[test]
fn test_arrow_is_separate_from_summary_text() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let root = Dropdown::new("fruit")
        .options(fruits())
        .state(&state)
        .build(&registry);

    assert_eq!(summary_of(&root), "Select");
    let arrows = find_by_class(&root, "select-arrow");
    assert_eq!(arrows[0].text_content(), Some(SELECT_ARROW));
}

#[test]
fn test_custom_summary_renderer() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    fn joined(summary: &SelectionSummary<'_>) -> Element {
        let names: Vec<&str> = summary.selected_items.iter().map(|o| o.name()).collect();
        Element::text(names.join(" + ")).class("joined")
    }

    let root = Dropdown::new("fruit")
        .options(fruits())
        .multi_select(true)
        .value(vec!["B", "A"])
        .render_selection_summary(joined)
        .state(&state)
        .build(&registry);

    assert_eq!(
        find_by_class(&root, "joined")[0].text_content(),
        Some("Banana + Apple")
    );
    assert!(find_by_class(&root, "selection-summary").is_empty());
}

// =============================================================================
// End-to-end through the registry
// =============================================================================

fn build_fruit(
    state: &DropdownState,
    registry: &HandlerRegistry,
    multi_select: bool,
    value: SelectionSeed,
    form: &Form,
) -> Element {
    registry.clear();
    Dropdown::new("fruit")
        .label("Select fruit")
        .options(fruits())
        .multi_select(multi_select)
        .value(value)
        .sink(form.sink())
        .state(state)
        .build(registry)
}

#[test]
fn test_single_select_scenario() {
    let (modal, hides) = counting_modal();
    let state = DropdownState::with_modal(modal);
    let registry = HandlerRegistry::new();
    let form = Form::new();
    let seed = SelectionSeed::from("");

    let root = build_fruit(&state, &registry, false, seed.clone(), &form);
    assert_eq!(summary_of(&root), "Select");
    assert!(find_element(&root, "fruit-body").is_none());

    assert!(registry.activate("fruit-activator"));
    let root = build_fruit(&state, &registry, false, seed.clone(), &form);
    assert!(find_element(&root, "fruit-body").is_some());

    assert!(registry.activate("fruit-opt-0"));
    let root = build_fruit(&state, &registry, false, seed.clone(), &form);
    assert_eq!(state.selected(), ids(&["A"]));
    assert_eq!(summary_of(&root), "Apple");
    assert!(find_element(&root, "fruit-body").is_none());
    assert_eq!(hides.load(Ordering::SeqCst), 1);

    registry.activate("fruit-activator");
    build_fruit(&state, &registry, false, seed.clone(), &form);
    registry.activate("fruit-opt-1");
    let root = build_fruit(&state, &registry, false, seed, &form);

    assert_eq!(state.selected(), ids(&["B"]));
    assert_eq!(summary_of(&root), "Banana");
    assert_eq!(hides.load(Ordering::SeqCst), 2);
    assert_eq!(form.value("fruit"), Some(FieldValue::Id(Identifier::from("B"))));
}

#[test]
fn test_multi_select_scenario() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    let form = Form::new();
    let seed = SelectionSeed::from(Vec::<Identifier>::new());

    build_fruit(&state, &registry, true, seed.clone(), &form);
    registry.activate("fruit-activator");
    build_fruit(&state, &registry, true, seed.clone(), &form);

    registry.activate("fruit-opt-0");
    let root = build_fruit(&state, &registry, true, seed.clone(), &form);
    assert_eq!(state.selected(), ids(&["A"]));
    assert_eq!(summary_of(&root), "1 selected");

    registry.activate("fruit-opt-0");
    let root = build_fruit(&state, &registry, true, seed.clone(), &form);
    assert_eq!(state.selected(), ids(&["A"]));
    assert_eq!(summary_of(&root), "1 selected");

    registry.activate("fruit-opt-1");
    let root = build_fruit(&state, &registry, true, seed, &form);
    assert_eq!(state.selected(), ids(&["A", "B"]));
    assert_eq!(summary_of(&root), "2 selected");
    assert!(state.modal().is_open());
    assert_eq!(form.value("fruit"), Some(FieldValue::Ids(ids(&["A", "B"]))));
}

#[test]
fn test_selected_row_is_marked() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();

    let root = Dropdown::new("fruit")
        .options(fruits())
        .value("B")
        .state(&state)
        .build(&registry);

    let rows = find_by_class(&root, "list-item");
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].has_class("selected"));
    assert!(rows[1].has_class("selected"));
    assert_eq!(rows[1].get_data("option-id").map(String::as_str), Some("B"));
}

#[test]
fn test_rendered_text() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();

    let root = Dropdown::new("fruit")
        .label("Fruit")
        .appearance(Appearance::Block)
        .options(fruits())
        .value("A")
        .state(&state)
        .build(&registry);

    assert_eq!(render_plain(&root), "Fruit\nApple ▼\n  Apple\n  Banana");
}

// =============================================================================
// Item renderers and configuration
// =============================================================================

fn starred_item(props: &DropdownItemProps<'_>, registry: &HandlerRegistry) -> Element {
    let star = if props.is_selected() { "*" } else { "-" };
    if let Some(id) = props.identifier() {
        registry.register(&props.element_id, "on_activate", props.select_item.handler(id));
    }
    Element::text(format!("{star} {}", props.item_data.name()))
        .id(&props.element_id)
        .class("starred")
        .clickable(true)
}

#[test]
fn test_custom_item_renderer_can_select() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();

    let build = |registry: &HandlerRegistry| {
        registry.clear();
        Dropdown::new("fruit")
            .options(fruits())
            .multi_select(true)
            .item(starred_item)
            .state(&state)
            .build(registry)
    };

    build(&registry);
    registry.activate("fruit-opt-1");
    let root = build(&registry);

    let rows: Vec<&str> = find_by_class(&root, "starred")
        .iter()
        .filter_map(|row| row.text_content())
        .collect();
    assert_eq!(rows, vec!["- Apple", "* Banana"]);
}

#[test]
fn test_custom_id_attribute_with_numbers() {
    let options = OptionRecord::list_from_json(
        r#"[{"sku": 7, "name": "Kiwi"}, {"sku": 9, "name": "Lime"}]"#,
    )
    .unwrap();
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();

    Dropdown::new("fruit")
        .options(options.clone())
        .id_attribute("sku")
        .state(&state)
        .build(&registry);
    registry.activate("fruit-opt-1");

    assert_eq!(state.selected(), vec![Identifier::Number(9)]);
    let dropdown = Dropdown::new("fruit")
        .options(options)
        .id_attribute("sku")
        .state(&state);
    assert_eq!(dropdown.summary_text(), "Lime");
}

#[test]
fn test_option_without_identifier_is_not_selectable() {
    let options = vec![
        OptionRecord::default().with_attribute("name", "Mystery"),
        OptionRecord::new("A", "Apple"),
    ];
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();

    let root = Dropdown::new("fruit")
        .options(options)
        .state(&state)
        .build(&registry);

    let mystery = find_element(&root, "fruit-opt-0").unwrap();
    assert!(!mystery.clickable);
    assert!(!registry.activate("fruit-opt-0"));
    assert!(state.selected().is_empty());
}

#[test]
fn test_disabled_dropdown_registers_nothing() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let root = Dropdown::new("fruit")
        .options(fruits())
        .disabled()
        .state(&state)
        .build(&registry);

    assert!(registry.is_empty());
    assert!(petaldom::collect_clickable(&root).is_empty());
    assert!(!registry.activate("fruit-activator"));
}

#[test]
fn test_custom_element_id_and_class() {
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let root = Dropdown::new("fruit")
        .id("picker")
        .class_name("wide")
        .options(fruits())
        .state(&state)
        .build(&registry);

    assert_eq!(root.id, "picker-wrapper");
    assert!(root.has_class("wide"));
    assert!(root.has_class("inline"));
    assert!(registry.activate("picker-activator"));
    assert!(state.modal().is_open());
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_searchable_filters_rows_but_not_selection() {
    let options = vec![
        OptionRecord::new("A", "Apple"),
        OptionRecord::new("B", "Banana"),
        OptionRecord::new("C", "Blueberry"),
    ];
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();

    let build = |registry: &HandlerRegistry| {
        registry.clear();
        Dropdown::new("fruit")
            .options(options.clone())
            .multi_select(true)
            .value(vec!["A"])
            .searchable()
            .state(&state)
            .build(registry)
    };

    build(&registry);
    registry.activate("fruit-activator");
    build(&registry);
    assert!(registry.change_text("fruit-search", "bry"));
    let root = build(&registry);

    let rows: Vec<&str> = find_by_class(&root, "list-item")
        .iter()
        .filter_map(|row| row.text_content())
        .collect();
    assert_eq!(rows, vec!["Blueberry"]);
    // Row ids keep their position in the full option list
    assert!(find_element(&root, "fruit-opt-2").is_some());
    assert_eq!(summary_of(&root), "1 selected");

    registry.activate("fruit-opt-2");
    assert_eq!(state.selected(), ids(&["A", "C"]));
}

#[test]
fn test_filter_predicate_keeps_order() {
    let options = vec![
        OptionRecord::new("A", "Apple"),
        OptionRecord::new("B", "Banana"),
        OptionRecord::new("C", "Cherry"),
    ];
    let state = DropdownState::new();
    let registry = HandlerRegistry::new();
    state.modal().show_modal();
    state.set_query("skip-banana");

    let root = Dropdown::new("fruit")
        .options(options)
        .filter(|query: &str, option: &OptionRecord| {
            !(query == "skip-banana" && option.name() == "Banana")
        })
        .state(&state)
        .build(&registry);

    let rows: Vec<&str> = find_by_class(&root, "list-item")
        .iter()
        .filter_map(|row| row.text_content())
        .collect();
    assert_eq!(rows, vec!["Apple", "Cherry"]);
}
