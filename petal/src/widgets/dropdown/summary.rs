//! Selection summary shown in the dropdown activator.

use std::sync::Arc;

use petaldom::{Color, Element, Style};

use crate::value::OptionRecord;

/// Indicator glyph drawn after the summary text.
pub const SELECT_ARROW: &str = "▼";

/// What a summary renderer gets to work with.
#[derive(Debug, Clone)]
pub struct SelectionSummary<'a> {
    /// Selected options resolved against the current option list, in
    /// selection order. Identifiers without a matching option are absent.
    pub selected_items: Vec<&'a OptionRecord>,
    pub multi_select: bool,
    pub no_selection_label: &'a str,
}

impl SelectionSummary<'_> {
    /// `"N selected"` for multi-select, the first option's name for
    /// single-select, `no_selection_label` when nothing resolved.
    pub fn summary_text(&self) -> String {
        match self.selected_items.first() {
            None => self.no_selection_label.to_string(),
            Some(_) if self.multi_select => format!("{} selected", self.selected_items.len()),
            Some(first) => first.name().to_string(),
        }
    }
}

/// Replaceable summary renderer.
pub type SummaryRenderer = Arc<dyn Fn(&SelectionSummary<'_>) -> Element + Send + Sync>;

/// Summary text followed by the arrow glyph.
pub fn default_render_selection_summary(summary: &SelectionSummary<'_>) -> Element {
    Element::row()
        .gap(1)
        .child(Element::text(summary.summary_text()).class("selection-summary"))
        .child(
            Element::text(SELECT_ARROW)
                .class("select-arrow")
                .style(Style::new().foreground(Color::var("arrow"))),
        )
}
