//! Checkbox widget - a toggleable box with its label beside it.

use std::sync::Arc;

use petaldom::Element;

use super::field::{field_builders, publish, FieldProps};
use super::{HasState, NeedsState};
use crate::handler_context::{HandlerRegistry, ON_ACTIVATE};
use crate::state::State;
use crate::value::FieldValue;

/// A checkbox widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let agree = State::new(false);
///
/// let element = Checkbox::new("agree")
///     .label("I agree to terms")
///     .sink(form.sink())
///     .state(&agree)
///     .build(&registry);
/// ```
pub struct Checkbox<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    on_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
}

impl Checkbox<NeedsState> {
    /// Create a new checkbox builder publishing under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<bool>) -> Checkbox<HasState<'_, State<bool>>> {
        Checkbox {
            state_marker: HasState(s),
            field: self.field,
            on_change: self.on_change,
        }
    }
}

impl<S> Checkbox<S> {
    field_builders!();

    /// Run `f` with the new checked state after every toggle.
    pub fn on_change(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl<'a> Checkbox<HasState<'a, State<bool>>> {
    /// Build the checkbox element.
    ///
    /// Registers the toggle handler unless disabled.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let checked = state.get();
        let id = self.field.element_id();

        log::debug!("Checkbox::build id={} checked={}", id, checked);

        let indicator = Element::text(if checked { "[x]" } else { "[ ]" }).class("checkbox-indicator");

        // The label sits inside the clickable row rather than in the wrapper
        let elem = match self.field.label.as_str() {
            "" => Element::box_().child(indicator),
            label => Element::row().gap(1).children([indicator, Element::text(label)]),
        }
        .id(&id)
        .class("checkbox")
        .data("checked", checked.to_string())
        .focusable(!self.field.disabled)
        .clickable(!self.field.disabled)
        .disabled(self.field.disabled);

        if !self.field.disabled {
            let state = state.clone();
            let name = self.field.name.clone();
            let sink = self.field.sink.clone();
            let on_change = self.on_change.clone();
            registry.register(
                &id,
                ON_ACTIVATE,
                Arc::new(move |_hx| {
                    state.update(|v| *v = !*v);
                    let checked = state.get();
                    publish(sink.as_ref(), &name, FieldValue::Bool(checked));
                    if let Some(on_change) = &on_change {
                        on_change(checked);
                    }
                }),
            );
        }

        let field = FieldProps {
            label: String::new(),
            ..self.field
        };
        field.wrap(elem)
    }
}
