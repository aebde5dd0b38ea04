//! Text input widget - a single-line text or password field.

use std::sync::Arc;

use petaldom::text::{pad_to_width, truncate_to_width};
use petaldom::{Color, Element, Style};

use super::field::{field_builders, publish, FieldProps};
use super::{HasState, NeedsState};
use crate::handler_context::{HandlerRegistry, ON_CHANGE};
use crate::state::State;
use crate::value::FieldValue;

/// Glyph drawn for every character of a password.
const PASSWORD_MASK: char = '•';

pub(crate) type TextCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// What the input holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    /// Rendered masked; the value itself is untouched.
    Password,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

/// A text input widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let username = State::new(String::new());
///
/// let element = Input::new("username")
///     .label("Username")
///     .placeholder("Enter username...")
///     .sink(form.sink())
///     .state(&username)
///     .build(&registry);
///
/// registry.change_text("username", "ada");
/// ```
pub struct Input<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    input_type: InputType,
    placeholder: Option<String>,
    width: Option<u16>,
    on_change: Option<TextCallback>,
}

impl Input<NeedsState> {
    /// Create a new input builder publishing under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            input_type: InputType::default(),
            placeholder: None,
            width: None,
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<String>) -> Input<HasState<'_, State<String>>> {
        Input {
            state_marker: HasState(s),
            field: self.field,
            input_type: self.input_type,
            placeholder: self.placeholder,
            width: self.width,
            on_change: self.on_change,
        }
    }
}

impl<S> Input<S> {
    field_builders!();

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Shorthand for `input_type(InputType::Password)`.
    pub fn password(self) -> Self {
        self.input_type(InputType::Password)
    }

    /// Set the placeholder text shown while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the input width in characters.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Run `f` with the new text after every change.
    pub fn on_change(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl<'a> Input<HasState<'a, State<String>>> {
    /// Build the input element.
    ///
    /// Registers the `on_change` handler unless disabled.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let value = state.get();
        let id = self.field.element_id();

        log::debug!(
            "Input::build id={} type={} len={}",
            id,
            self.input_type.as_str(),
            value.chars().count()
        );

        let (text, style) = match (&self.placeholder, value.is_empty()) {
            (Some(placeholder), true) => (
                placeholder.clone(),
                Style::new().foreground(Color::var("muted")).italic(),
            ),
            _ => (display_text(&value, self.input_type), Style::new().underline()),
        };
        let text = match self.width {
            Some(width) => pad_to_width(&truncate_to_width(&text, width as usize), width as usize),
            None => text,
        };

        let elem = Element::text(text)
            .id(&id)
            .class("input")
            .style(style)
            .data("type", self.input_type.as_str())
            .focusable(!self.field.disabled)
            .disabled(self.field.disabled);

        if !self.field.disabled {
            register_text_change(registry, &id, state, &self.field, self.on_change.clone());
        }

        self.field.wrap(elem)
    }
}

/// What a text value looks like on screen.
fn display_text(value: &str, input_type: InputType) -> String {
    match input_type {
        InputType::Text => value.to_string(),
        InputType::Password => value.chars().map(|_| PASSWORD_MASK).collect(),
    }
}

/// Register the change handler shared by text inputs and text areas.
pub(crate) fn register_text_change(
    registry: &HandlerRegistry,
    id: &str,
    state: &State<String>,
    field: &FieldProps,
    on_change: Option<TextCallback>,
) {
    let state = state.clone();
    let name = field.name.clone();
    let sink = field.sink.clone();

    registry.register(
        id,
        ON_CHANGE,
        Arc::new(move |hx| {
            let Some(text) = hx.changed_text() else {
                return;
            };
            state.set(text.to_string());
            publish(sink.as_ref(), &name, FieldValue::Text(text.to_string()));
            if let Some(on_change) = &on_change {
                on_change(text);
            }
        }),
    );
}
