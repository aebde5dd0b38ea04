//! Dropdown item renderers.

use petaldom::{Color, Edges, Element, Style};

use super::SelectItem;
use crate::handler_context::{HandlerRegistry, ON_ACTIVATE};
use crate::value::{Identifier, OptionRecord};

/// Everything an item renderer may use to draw one option row.
pub struct DropdownItemProps<'a> {
    /// Element id reserved for this row.
    pub element_id: String,
    /// The option being rendered.
    pub item_data: &'a OptionRecord,
    /// The current selection set.
    pub selected: &'a [Identifier],
    /// Attribute holding the option identifier.
    pub id_attribute: &'a str,
    /// Selects an identifier, exactly as a click on the default row would.
    pub select_item: &'a SelectItem,
}

impl DropdownItemProps<'_> {
    /// This option's identifier, if it has a usable one.
    pub fn identifier(&self) -> Option<Identifier> {
        self.item_data.identifier(self.id_attribute)
    }

    /// Whether this option is part of the selection set.
    pub fn is_selected(&self) -> bool {
        self.identifier()
            .is_some_and(|id| self.selected.contains(&id))
    }
}

/// Renders one option row of the dropdown body.
///
/// Implemented for closures, so a custom row is usually just:
///
/// ```ignore
/// Dropdown::new("fruit").item(|props: &DropdownItemProps<'_>, registry: &HandlerRegistry| {
///     let mut row = Element::text(format!("* {}", props.item_data.name()))
///         .id(&props.element_id)
///         .clickable(true);
///     if let Some(id) = props.identifier() {
///         registry.register(&props.element_id, "on_activate", props.select_item.handler(id));
///     }
///     row
/// })
/// ```
pub trait DropdownItem: Send + Sync {
    fn render(&self, props: &DropdownItemProps<'_>, registry: &HandlerRegistry) -> Element;
}

impl<F> DropdownItem for F
where
    F: Fn(&DropdownItemProps<'_>, &HandlerRegistry) -> Element + Send + Sync,
{
    fn render(&self, props: &DropdownItemProps<'_>, registry: &HandlerRegistry) -> Element {
        self(props, registry)
    }
}

/// Label row, click to select, highlighted while selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDropdownItem;

impl DropdownItem for DefaultDropdownItem {
    fn render(&self, props: &DropdownItemProps<'_>, registry: &HandlerRegistry) -> Element {
        let identifier = props.identifier();
        let selected = props.is_selected();

        let mut row = Element::text(props.item_data.name())
            .id(&props.element_id)
            .class("list-item")
            .padding(Edges::horizontal(1))
            .clickable(identifier.is_some())
            .focusable(identifier.is_some())
            .data("selected", selected.to_string());

        if selected {
            row = row.class("selected").style(
                Style::new()
                    .background(Color::var("selected"))
                    .bold(),
            );
        }

        match identifier {
            Some(id) => {
                row = row.data("option-id", id.to_string());
                registry.register(&props.element_id, ON_ACTIVATE, props.select_item.handler(id));
            }
            None => log::debug!(
                "option {:?} has no usable {:?} attribute, row is not selectable",
                props.item_data.name(),
                props.id_attribute
            ),
        }

        row
    }
}
