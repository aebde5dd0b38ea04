pub mod error;
pub mod form;
pub mod handler_context;
pub mod state;
pub mod validation;
pub mod value;
pub mod widgets;

pub use error::PetalError;
pub use form::{render_errors, Form, FormData, SharedSink, ValueSink};
pub use handler_context::{EventData, Handler, HandlerContext, HandlerRegistry};
pub use state::State;
pub use value::{FieldValue, Identifier, OptionRecord, SelectionSeed};

pub mod prelude {
    pub use crate::error::PetalError;
    pub use crate::form::{Form, FormData, SharedSink, ValueSink};
    pub use crate::handler_context::{EventData, Handler, HandlerContext, HandlerRegistry};
    pub use crate::state::State;
    pub use crate::validation::{FieldError, ValidationResult, Validator};
    pub use crate::value::{FieldValue, Identifier, OptionRecord, SelectionSeed};
    pub use crate::widgets::{
        Appearance, Button, ButtonAppearance, Checkbox, DefaultDropdownItem, Dropdown,
        DropdownItem, DropdownItemProps, DropdownState, FuzzyFilter, InlineModal, Input,
        InputType, RadioList, RangeSlider, SelectItem, SelectionSummary, SliderRange, SliderState, Textarea,
    };

    pub use petaldom::{Element, Style, Theme, WidgetTheme};
}
