//! Props shared by every form field and the wrapper that lays them out.

use petaldom::{Color, Element, Style};

use crate::form::SharedSink;
use crate::value::FieldValue;

/// How a field's label sits relative to its control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    /// Label and control on one line.
    #[default]
    Inline,
    /// Label above the control.
    Block,
}

impl Appearance {
    pub fn class(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Block => "block",
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct FieldProps {
    pub name: String,
    pub id: Option<String>,
    pub label: String,
    pub appearance: Appearance,
    pub class_name: String,
    pub disabled: bool,
    pub sink: Option<SharedSink>,
}

impl FieldProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Element id of the control; defaults to the field name.
    pub fn element_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.name.clone())
    }

    /// Wrap a control with the field label.
    pub fn wrap(&self, control: Element) -> Element {
        let id = self.element_id();
        let wrapper = match self.appearance {
            Appearance::Inline => Element::row().gap(1),
            Appearance::Block => Element::col(),
        }
        .id(format!("{id}-wrapper"))
        .class("form-el-wrapper")
        .class(self.appearance.class())
        .class(self.class_name.clone());

        let wrapper = if self.label.is_empty() {
            wrapper
        } else {
            wrapper.child(
                Element::text(&self.label)
                    .id(format!("{id}-label"))
                    .class("form-el-label")
                    .data("for", &id)
                    .style(Style::new().foreground(Color::var("label")).bold()),
            )
        };

        wrapper.child(control.class("form-el"))
    }
}

/// Hand a value to the sink, if there is one.
pub(crate) fn publish(sink: Option<&SharedSink>, name: &str, value: FieldValue) {
    match sink {
        Some(sink) => sink.on_value_change(name, value),
        None => log::trace!("{name} has no sink, value stays local"),
    }
}

/// Builder methods every field widget shares. Expects a `field: FieldProps` member.
macro_rules! field_builders {
    () => {
        /// Set the element id (defaults to the field name).
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.field.id = Some(id.into());
            self
        }

        /// Set the label text.
        pub fn label(mut self, label: impl Into<String>) -> Self {
            self.field.label = label.into();
            self
        }

        /// Set the label placement.
        pub fn appearance(mut self, appearance: $crate::widgets::Appearance) -> Self {
            self.field.appearance = appearance;
            self
        }

        /// Add a class to the field wrapper.
        pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
            self.field.class_name = class_name.into();
            self
        }

        /// Mark the field as disabled. Disabled fields register no handlers.
        pub fn disabled(mut self) -> Self {
            self.field.disabled = true;
            self
        }

        /// Publish value changes to `sink`.
        pub fn sink(mut self, sink: $crate::form::SharedSink) -> Self {
            self.field.sink = Some(sink);
            self
        }
    };
}

pub(crate) use field_builders;
