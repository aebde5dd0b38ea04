//! Form aggregate and the value sink widgets publish into.
//!
//! Widgets never look a form up; the sink is handed to each widget builder
//! explicitly. A widget without a sink still works, its changes just stay
//! local.

use std::collections::BTreeMap;
use std::sync::Arc;

use petaldom::{Color, Element, Style};
use serde::Serialize;

use crate::error::PetalError;
use crate::state::State;
use crate::validation::{FieldError, ValidationResult, Validator};
use crate::value::FieldValue;

/// Receiver for field value changes.
pub trait ValueSink: Send + Sync {
    /// Called with the field's name and its new value.
    fn on_value_change(&self, name: &str, value: FieldValue);
}

impl<F> ValueSink for F
where
    F: Fn(&str, FieldValue) + Send + Sync,
{
    fn on_value_change(&self, name: &str, value: FieldValue) {
        self(name, value)
    }
}

/// Shared handle to a sink, cloned into every widget that publishes to it.
pub type SharedSink = Arc<dyn ValueSink>;

/// Callback run with the submitted data.
pub type SubmitCallback = Arc<dyn Fn(&FormData) + Send + Sync>;

/// Snapshot of a form's values, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    pub data: BTreeMap<String, FieldValue>,
}

impl FormData {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.data.get(name)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serialize as a JSON object keyed by field name.
    pub fn to_json(&self) -> Result<String, PetalError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Aggregate state of a group of fields.
///
/// Cloning yields another handle to the same values.
///
/// # Example
///
/// ```ignore
/// let form = Form::new().on_submit(|data| println!("{:?}", data));
///
/// let fruit = DropdownState::new();
/// let element = Dropdown::new("fruit")
///     .options(fruits)
///     .sink(form.sink())
///     .state(&fruit)
///     .build(&registry);
/// ```
#[derive(Clone, Default)]
pub struct Form {
    values: State<BTreeMap<String, FieldValue>>,
    on_submit: Option<SubmitCallback>,
    validator: Option<Arc<Validator>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback run by a successful [`submit`](Self::submit).
    pub fn on_submit(mut self, f: impl Fn(&FormData) + Send + Sync + 'static) -> Self {
        self.on_submit = Some(Arc::new(f));
        self
    }

    /// Validate before every submit.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Seed a field's value, e.g. a slider's default.
    pub fn with_value(self, name: impl Into<String>, value: FieldValue) -> Self {
        let name = name.into();
        self.values.update(|values| {
            values.insert(name, value);
        });
        self
    }

    /// A sink publishing into this form.
    pub fn sink(&self) -> SharedSink {
        Arc::new(self.clone())
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.values.with(|values| values.get(name).cloned())
    }

    pub fn data(&self) -> FormData {
        FormData {
            data: self.values.get(),
        }
    }

    /// Forget every value.
    pub fn clear(&self) {
        self.values.update(BTreeMap::clear);
    }

    /// Validate the current values without submitting.
    pub fn validate(&self) -> ValidationResult {
        match &self.validator {
            Some(validator) => validator.validate(&self.data()),
            None => ValidationResult::Valid,
        }
    }

    /// Validate, then hand the data to the submit callback.
    ///
    /// Validation failures are returned and the callback is not run.
    pub fn submit(&self) -> Result<FormData, PetalError> {
        let data = self.data();

        let verdict = self.validate();
        if verdict.is_invalid() {
            log::info!("form submit rejected: {} invalid field(s)", verdict.errors().len());
        }
        verdict.into_result()?;

        log::debug!("form submit with {} field(s)", data.len());
        if let Some(on_submit) = &self.on_submit {
            on_submit(&data);
        }
        Ok(data)
    }
}

impl ValueSink for Form {
    fn on_value_change(&self, name: &str, value: FieldValue) {
        log::debug!("form value {name} = {value:?}");
        let name = name.to_string();
        self.values.update(|values| {
            values.insert(name, value);
        });
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("values", &self.values.get())
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// One line per field error, colored with the `error` theme variable.
pub fn render_errors(errors: &[FieldError]) -> Element {
    Element::col()
        .class("form-errors")
        .style(Style::new().foreground(Color::var("error")))
        .children(errors.iter().map(|e| {
            Element::text(format!("{}: {}", e.field_name, e.message))
                .class("form-error")
                .data("field", &e.field_name)
        }))
}
