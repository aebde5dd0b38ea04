//! Button widget.

use std::sync::Arc;

use petaldom::{Color, Element, Style};

use crate::handler_context::{Handler, HandlerRegistry, ON_ACTIVATE};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonAppearance {
    #[default]
    Default,
    /// The form's main action.
    Primary,
}

/// A button widget builder.
///
/// This is a stateless widget that creates a clickable button element.
///
/// # Example
///
/// ```ignore
/// let form_handle = form.clone();
/// let element = Button::new("Log In")
///     .id("login")
///     .appearance(ButtonAppearance::Primary)
///     .on_activate(move || {
///         let _ = form_handle.submit();
///     })
///     .build(&registry);
/// ```
#[derive(Clone, Default)]
pub struct Button {
    label: String,
    id: Option<String>,
    appearance: ButtonAppearance,
    class_name: String,
    disabled: bool,
    on_activate: Option<Handler>,
}

impl Button {
    /// Create a new button builder.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the button id (defaults to `"button"`).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn appearance(mut self, appearance: ButtonAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Mark the button as disabled.
    ///
    /// Disabled buttons are not focusable, not clickable, and don't register handlers.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn on_activate(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(move |_hx| f()));
        self
    }

    /// Build the button element.
    ///
    /// Registers the `on_activate` handler if provided and not disabled.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let id = self.id.unwrap_or_else(|| "button".into());

        let (class, style) = match self.appearance {
            ButtonAppearance::Default => ("btn", Style::new()),
            ButtonAppearance::Primary => (
                "btn-primary",
                Style::new().background(Color::var("primary")).bold(),
            ),
        };

        let elem = Element::text(format!("[ {} ]", self.label))
            .id(&id)
            .class("btn")
            .class(class)
            .class(self.class_name)
            .style(style)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled);

        if let (false, Some(handler)) = (self.disabled, self.on_activate) {
            registry.register(&id, ON_ACTIVATE, handler);
        }

        elem
    }
}
