//! Textarea widget - multi-line text input.

use std::sync::Arc;

use petaldom::{Color, Element, Style};

use super::field::{field_builders, FieldProps};
use super::input::{register_text_change, TextCallback};
use super::{HasState, NeedsState};
use crate::handler_context::HandlerRegistry;
use crate::state::State;

const DEFAULT_ROWS: u16 = 3;

/// A multi-line text input builder.
///
/// Shows at least `rows` lines; longer text grows the element.
pub struct Textarea<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    rows: u16,
    placeholder: Option<String>,
    on_change: Option<TextCallback>,
}

impl Textarea<NeedsState> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            rows: DEFAULT_ROWS,
            placeholder: None,
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<String>) -> Textarea<HasState<'_, State<String>>> {
        Textarea {
            state_marker: HasState(s),
            field: self.field,
            rows: self.rows,
            placeholder: self.placeholder,
            on_change: self.on_change,
        }
    }
}

impl<S> Textarea<S> {
    field_builders!();

    /// Minimum number of visible lines.
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn on_change(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl<'a> Textarea<HasState<'a, State<String>>> {
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let value = state.get();
        let id = self.field.element_id();

        let (text, style) = match (&self.placeholder, value.is_empty()) {
            (Some(placeholder), true) => (
                placeholder.clone(),
                Style::new().foreground(Color::var("muted")).italic(),
            ),
            _ => (value, Style::new()),
        };

        let mut lines: Vec<&str> = text.split('\n').collect();
        let rows = self.rows as usize;
        if lines.len() < rows {
            lines.resize(rows, "");
        }
        log::debug!("Textarea::build id={} lines={}", id, lines.len());

        let elem = Element::text(lines.join("\n"))
            .id(&id)
            .class("textarea")
            .style(style)
            .data("rows", self.rows.to_string())
            .focusable(!self.field.disabled)
            .disabled(self.field.disabled);

        if !self.field.disabled {
            register_text_change(registry, &id, state, &self.field, self.on_change.clone());
        }

        self.field.wrap(elem)
    }
}
