//! Dropdown widget - pick one or several options from an inline list.
//!
//! The closed dropdown shows a summary of the current selection. Clicking it
//! opens an inline body listing every option; clicking an option selects it.
//! Single-select replaces the selection and closes the body. Multi-select
//! appends the option and keeps the body open. There is no deselect.

mod filter;
mod item;
mod summary;

use std::sync::Arc;

use petaldom::{Color, Element, Style};

pub use filter::{fuzzy_filter, FilterMatch, FuzzyFilter, OptionFilter};
pub use item::{DefaultDropdownItem, DropdownItem, DropdownItemProps};
pub use summary::{
    default_render_selection_summary, SelectionSummary, SummaryRenderer, SELECT_ARROW,
};

use super::field::{field_builders, publish, FieldProps};
use super::list::render_list;
use super::{HasState, InlineModal, NeedsState};
use crate::form::SharedSink;
use crate::handler_context::{Handler, HandlerRegistry, ON_CHANGE};
use crate::state::State;
use crate::value::{FieldValue, Identifier, OptionRecord, SelectionSeed, DEFAULT_ID_ATTRIBUTE};

/// Callback receiving the selection set after every pick.
pub type ChangeCallback = Arc<dyn Fn(&[Identifier]) + Send + Sync>;

/// Summary text when nothing is selected.
const DEFAULT_NO_SELECTION_LABEL: &str = "Select";

/// Persistent state of a dropdown: the selection set, the open/closed
/// modal and the search query.
///
/// Keep one per dropdown and pass it to every build. The selection starts
/// out unseeded and takes the builder's `value` when first attached.
#[derive(Clone, Default)]
pub struct DropdownState {
    selected: State<Option<Vec<Identifier>>>,
    modal: InlineModal,
    query: State<String>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `modal` for the body, e.g. one with an `on_hide` callback.
    pub fn with_modal(modal: InlineModal) -> Self {
        Self {
            modal,
            ..Self::default()
        }
    }

    /// Current selection set, in selection order.
    pub fn selected(&self) -> Vec<Identifier> {
        self.selected.get().unwrap_or_default()
    }

    pub fn modal(&self) -> &InlineModal {
        &self.modal
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    fn seed(&self, seed: &SelectionSeed) {
        if self.selected.with(Option::is_some) {
            return;
        }
        let initial = seed.clone().normalize();
        log::debug!("dropdown seeded with {} identifier(s)", initial.len());
        self.selected.set(Some(initial));
    }

    fn replace(&self, selection: Vec<Identifier>) {
        self.selected.set(Some(selection));
    }
}

impl std::fmt::Debug for DropdownState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownState")
            .field("selected", &self.selected.get())
            .field("open", &self.modal.is_open())
            .field("query", &self.query.get())
            .finish()
    }
}

/// Handle that performs a pick. Item renderers call it (or register its
/// [`handler`](Self::handler)) to select an option.
#[derive(Clone)]
pub struct SelectItem {
    name: String,
    multi_select: bool,
    sink: Option<SharedSink>,
    on_change: Option<ChangeCallback>,
    state: DropdownState,
}

impl SelectItem {
    /// Select `id`.
    ///
    /// Multi-select appends `id` to a copy of the selection and publishes the
    /// whole set; an identifier already present leaves the selection and the
    /// sink alone. Single-select replaces the selection, publishes the
    /// identifier and closes the body. `on_change` runs in both modes with
    /// the resulting set.
    pub fn select(&self, id: Identifier) {
        let previous = self.state.selected();

        let selection = if self.multi_select {
            if previous.contains(&id) {
                log::debug!("dropdown {} already holds {id}", self.name);
                previous
            } else {
                let selection = [previous.as_slice(), std::slice::from_ref(&id)].concat();
                self.state.replace(selection.clone());
                publish(self.sink.as_ref(), &self.name, FieldValue::Ids(selection.clone()));
                selection
            }
        } else {
            let selection = vec![id.clone()];
            self.state.replace(selection.clone());
            publish(self.sink.as_ref(), &self.name, FieldValue::Id(id));
            self.state.modal.hide_modal();
            selection
        };

        log::debug!("dropdown {} selection = {:?}", self.name, selection);

        if let Some(on_change) = &self.on_change {
            on_change(&selection);
        }
    }

    /// An activation handler selecting `id`.
    pub fn handler(&self, id: Identifier) -> Handler {
        let select_item = self.clone();
        Arc::new(move |_hx| select_item.select(id.clone()))
    }
}

impl std::fmt::Debug for SelectItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectItem")
            .field("name", &self.name)
            .field("multi_select", &self.multi_select)
            .finish()
    }
}

/// A dropdown builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let fruit = DropdownState::new();
///
/// let element = Dropdown::new("fruit")
///     .label("Fruit")
///     .options(OptionRecord::list_from_json(FRUITS)?)
///     .no_selection_label("Pick a fruit")
///     .sink(form.sink())
///     .state(&fruit)
///     .build(&registry);
/// ```
pub struct Dropdown<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    options: Vec<OptionRecord>,
    value: SelectionSeed,
    id_attribute: String,
    no_selection_label: String,
    multi_select: bool,
    on_change: Option<ChangeCallback>,
    item: Arc<dyn DropdownItem>,
    render_selection_summary: SummaryRenderer,
    filter: Option<Arc<dyn OptionFilter>>,
    searchable: bool,
}

impl Dropdown<NeedsState> {
    /// Create a dropdown publishing under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            options: Vec::new(),
            value: SelectionSeed::Empty,
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            no_selection_label: DEFAULT_NO_SELECTION_LABEL.to_string(),
            multi_select: false,
            on_change: None,
            item: Arc::new(DefaultDropdownItem),
            render_selection_summary: Arc::new(default_render_selection_summary),
            filter: None,
            searchable: false,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    ///
    /// Seeds the selection from `value` unless this state was seeded before.
    pub fn state(self, s: &DropdownState) -> Dropdown<HasState<'_, DropdownState>> {
        s.seed(&self.value);
        Dropdown {
            state_marker: HasState(s),
            field: self.field,
            options: self.options,
            value: self.value,
            id_attribute: self.id_attribute,
            no_selection_label: self.no_selection_label,
            multi_select: self.multi_select,
            on_change: self.on_change,
            item: self.item,
            render_selection_summary: self.render_selection_summary,
            filter: self.filter,
            searchable: self.searchable,
        }
    }
}

impl<S> Dropdown<S> {
    field_builders!();

    /// Set the options, in display order.
    pub fn options(mut self, options: impl IntoIterator<Item = OptionRecord>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Initial selection, applied the first time the state is used.
    pub fn value(mut self, value: impl Into<SelectionSeed>) -> Self {
        self.value = value.into();
        self
    }

    /// Attribute holding each option's identifier (default `"id"`).
    pub fn id_attribute(mut self, id_attribute: impl Into<String>) -> Self {
        self.id_attribute = id_attribute.into();
        self
    }

    /// Summary text when nothing is selected (default `"Select"`).
    pub fn no_selection_label(mut self, label: impl Into<String>) -> Self {
        self.no_selection_label = label.into();
        self
    }

    pub fn multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Run `f` with the selection set after every pick.
    pub fn on_change(mut self, f: impl Fn(&[Identifier]) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Replace the option row renderer.
    pub fn item(mut self, item: impl DropdownItem + 'static) -> Self {
        self.item = Arc::new(item);
        self
    }

    /// Replace the summary renderer.
    pub fn render_selection_summary(
        mut self,
        f: impl Fn(&SelectionSummary<'_>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_selection_summary = Arc::new(f);
        self
    }

    /// Only show the options `filter` retains for the current query.
    pub fn filter(mut self, filter: impl OptionFilter + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Show a query field in the body. Uses [`FuzzyFilter`] unless a filter
    /// was set.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

impl<'a> Dropdown<HasState<'a, DropdownState>> {
    /// The pick handle this dropdown hands to its item renderer.
    pub fn select_item_handle(&self) -> SelectItem {
        let state = self.state_marker.0;
        SelectItem {
            name: self.field.name.clone(),
            multi_select: self.multi_select,
            sink: self.field.sink.clone(),
            on_change: self.on_change.clone(),
            state: state.clone(),
        }
    }

    /// Select `id` as if its row had been clicked.
    pub fn select_item(&self, id: impl Into<Identifier>) {
        self.select_item_handle().select(id.into());
    }

    /// Selected options in selection order. Identifiers with no matching
    /// option are skipped.
    pub fn selected_items(&self) -> Vec<&OptionRecord> {
        resolve(
            &self.options,
            &self.state_marker.0.selected(),
            &self.id_attribute,
        )
    }

    /// Text of the default summary.
    pub fn summary_text(&self) -> String {
        self.summary().summary_text()
    }

    fn summary(&self) -> SelectionSummary<'_> {
        SelectionSummary {
            selected_items: self.selected_items(),
            multi_select: self.multi_select,
            no_selection_label: &self.no_selection_label,
        }
    }

    /// Build the dropdown element.
    ///
    /// Registers the activator toggle, one handler per selectable row and,
    /// when searchable, the query change handler. Disabled dropdowns
    /// register nothing.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let id = self.field.element_id();
        let select_item = self.select_item_handle();

        log::debug!(
            "Dropdown::build id={} open={} options_count={} selected={:?}",
            id,
            state.modal.is_open(),
            self.options.len(),
            state.selected()
        );

        let activator = (self.render_selection_summary)(&self.summary());
        let control = state.modal.build(
            &id,
            activator,
            || self.build_body(&id, &select_item, registry),
            registry,
            self.field.disabled,
        );

        self.field
            .wrap(control.class("dropdown").data("multi-select", self.multi_select.to_string()))
    }

    fn build_body(&self, id: &str, select_item: &SelectItem, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let selected = state.selected();
        let query = state.query();

        let visible: Vec<(usize, &OptionRecord)> = match self.active_filter() {
            Some(filter) => filter
                .retain(&query, &self.options)
                .into_iter()
                .filter_map(|i| self.options.get(i).map(|option| (i, option)))
                .collect(),
            None => self.options.iter().enumerate().collect(),
        };

        let list = render_list(format!("{id}-list"), &visible, |_, (index, option)| {
            let props = DropdownItemProps {
                element_id: format!("{id}-opt-{index}"),
                item_data: option,
                selected: &selected,
                id_attribute: &self.id_attribute,
                select_item,
            };
            self.item.render(&props, registry)
        });

        if !self.searchable {
            return list;
        }

        Element::col()
            .child(self.build_search(id, &query, state, registry))
            .child(list)
    }

    fn active_filter(&self) -> Option<Arc<dyn OptionFilter>> {
        match (&self.filter, self.searchable) {
            (Some(filter), _) => Some(Arc::clone(filter)),
            (None, true) => Some(Arc::new(FuzzyFilter)),
            (None, false) => None,
        }
    }

    fn build_search(
        &self,
        id: &str,
        query: &str,
        state: &DropdownState,
        registry: &HandlerRegistry,
    ) -> Element {
        let search_id = format!("{id}-search");
        let search = if query.is_empty() {
            Element::text("Search…").style(Style::new().foreground(Color::var("muted")))
        } else {
            Element::text(query)
        };

        let state = state.clone();
        registry.register(
            &search_id,
            ON_CHANGE,
            Arc::new(move |hx| {
                if let Some(text) = hx.changed_text() {
                    state.set_query(text);
                }
            }),
        );

        search
            .id(search_id)
            .class("dropdown-search")
            .focusable(true)
    }
}

fn resolve<'o>(
    options: &'o [OptionRecord],
    selected: &[Identifier],
    id_attribute: &str,
) -> Vec<&'o OptionRecord> {
    selected
        .iter()
        .filter_map(|id| {
            options
                .iter()
                .find(|option| option.identifier(id_attribute).as_ref() == Some(id))
        })
        .collect()
}
