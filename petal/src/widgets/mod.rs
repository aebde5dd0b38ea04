//! Form widgets.
//!
//! Every widget is a builder: configure it, hand it the widget's state, and
//! call `build` to get an [`Element`](petaldom::Element) with its handlers
//! registered. Keep the state between builds; rebuild after dispatching an
//! event.

mod button;
mod checkbox;
pub mod dropdown;
mod field;
mod inline_modal;
mod input;
pub mod list;
mod radio_list;
mod range_slider;
mod textarea;

pub use button::{Button, ButtonAppearance};
pub use checkbox::Checkbox;
pub use dropdown::{
    ChangeCallback, DefaultDropdownItem, Dropdown, DropdownItem, DropdownItemProps,
    DropdownState, FuzzyFilter, OptionFilter, SelectItem, SelectionSummary, SummaryRenderer,
};
pub use field::Appearance;
pub use inline_modal::InlineModal;
pub use input::{Input, InputType};
pub use list::render_list;
pub use radio_list::RadioList;
pub use range_slider::{RangeSlider, SliderRange, SliderState};
pub use textarea::Textarea;

/// Typestate marker: the widget still needs a state reference.
pub struct NeedsState;

/// Typestate marker: the widget has its state reference.
pub struct HasState<'a, T>(&'a T);
