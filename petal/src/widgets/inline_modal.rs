//! Inline modal - an activator with a detachable body shown while open.

use std::sync::Arc;

use petaldom::{Color, Edges, Element, Style};

use crate::handler_context::{HandlerRegistry, ON_ACTIVATE};
use crate::state::State;

type HideCallback = Arc<dyn Fn() + Send + Sync>;

/// Open/closed state of an inline modal.
///
/// Clicking the activator toggles the modal. Owners close it imperatively
/// with [`hide_modal`](Self::hide_modal). Only real transitions have side
/// effects: hiding a closed modal does nothing.
#[derive(Clone, Default)]
pub struct InlineModal {
    open: State<bool>,
    on_hide: Option<HideCallback>,
}

impl InlineModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` every time the modal goes from open to closed.
    pub fn on_hide(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_hide = Some(Arc::new(f));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn show_modal(&self) {
        if !self.is_open() {
            self.open.set(true);
        }
    }

    pub fn hide_modal(&self) {
        if self.is_open() {
            self.open.set(false);
            if let Some(on_hide) = &self.on_hide {
                on_hide();
            }
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.hide_modal();
        } else {
            self.show_modal();
        }
    }

    /// Build the modal: the activator always, the body only while open.
    ///
    /// The activator is wrapped in a clickable `{id}-activator` element and
    /// the body in `{id}-body`.
    pub fn build(
        &self,
        id: &str,
        activator: Element,
        body: impl FnOnce() -> Element,
        registry: &HandlerRegistry,
        disabled: bool,
    ) -> Element {
        let activator_id = format!("{id}-activator");
        let open = self.is_open();

        let activator = Element::box_()
            .id(&activator_id)
            .class("inline-modal-activator")
            .focusable(!disabled)
            .clickable(!disabled)
            .disabled(disabled)
            .child(activator);

        if !disabled {
            let modal = self.clone();
            registry.register(&activator_id, ON_ACTIVATE, Arc::new(move |_hx| modal.toggle()));
        }

        let container = Element::col()
            .id(id)
            .class("inline-modal")
            .data("open", open.to_string())
            .child(activator);

        if open {
            container.child(
                Element::col()
                    .id(format!("{id}-body"))
                    .class("inline-modal-body")
                    .padding(Edges::left(1))
                    .style(Style::new().foreground(Color::var("label")))
                    .child(body()),
            )
        } else {
            container
        }
    }
}

impl std::fmt::Debug for InlineModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineModal")
            .field("open", &self.is_open())
            .finish()
    }
}
