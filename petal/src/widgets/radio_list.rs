//! Radio list widget - exactly one of several options.

use std::sync::Arc;

use petaldom::Element;

use super::field::{field_builders, publish, FieldProps};
use super::{HasState, NeedsState};
use crate::handler_context::{HandlerRegistry, ON_ACTIVATE};
use crate::state::State;
use crate::value::{FieldValue, Identifier, OptionRecord, DEFAULT_ID_ATTRIBUTE};

/// A radio list builder. Options are [`OptionRecord`]s, like a dropdown's.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
pub struct RadioList<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    options: Vec<OptionRecord>,
    id_attribute: String,
    on_change: Option<Arc<dyn Fn(&Identifier) + Send + Sync>>,
}

impl RadioList<NeedsState> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            options: Vec::new(),
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(
        self,
        s: &State<Option<Identifier>>,
    ) -> RadioList<HasState<'_, State<Option<Identifier>>>> {
        RadioList {
            state_marker: HasState(s),
            field: self.field,
            options: self.options,
            id_attribute: self.id_attribute,
            on_change: self.on_change,
        }
    }
}

impl<S> RadioList<S> {
    field_builders!();

    pub fn options(mut self, options: impl IntoIterator<Item = OptionRecord>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn id_attribute(mut self, id_attribute: impl Into<String>) -> Self {
        self.id_attribute = id_attribute.into();
        self
    }

    pub fn on_change(mut self, f: impl Fn(&Identifier) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl<'a> RadioList<HasState<'a, State<Option<Identifier>>>> {
    /// Build the radio list element.
    ///
    /// Registers one handler per option row that has an identifier.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let current = state.get();
        let id = self.field.element_id();

        log::debug!(
            "RadioList::build id={} options_count={} value={:?}",
            id,
            self.options.len(),
            current
        );

        let mut container = Element::col().id(&id).class("radio-list");

        for (i, option) in self.options.iter().enumerate() {
            let opt_id = format!("{}-opt-{}", id, i);
            let value = option.identifier(&self.id_attribute);
            let is_selected = value.is_some() && value == current;
            let enabled = !self.field.disabled && value.is_some();

            // Radio indicator: ● for selected, ○ for unselected
            let indicator = if is_selected { "●" } else { "○" };

            let opt_row = Element::row()
                .id(&opt_id)
                .class("radio-option")
                .gap(1)
                .focusable(enabled)
                .clickable(enabled)
                .disabled(self.field.disabled)
                .data("selected", is_selected.to_string())
                .children([Element::text(indicator), Element::text(option.name())]);

            container = container.child(opt_row);

            if let (true, Some(value)) = (enabled, value) {
                let state = state.clone();
                let name = self.field.name.clone();
                let sink = self.field.sink.clone();
                let on_change = self.on_change.clone();
                registry.register(
                    &opt_id,
                    ON_ACTIVATE,
                    Arc::new(move |_hx| {
                        state.set(Some(value.clone()));
                        publish(sink.as_ref(), &name, FieldValue::Id(value.clone()));
                        if let Some(on_change) = &on_change {
                            on_change(&value);
                        }
                    }),
                );
            }
        }

        self.field.wrap(container)
    }
}
