//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use crate::form::FormData;
use crate::value::FieldValue;

/// A validation rule. `None` means the field has no value yet.
type Rule = Box<dyn Fn(Option<&FieldValue>) -> Result<(), String> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    rules: Vec<Rule>,
}

/// Rules for a set of form fields.
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules for a field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                rules: Vec::new(),
            },
        }
    }

    /// Run every rule against a snapshot.
    pub fn validate(&self, data: &FormData) -> ValidationResult {
        self.fields
            .iter()
            .filter_map(|field| {
                let value = data.get(&field.name);
                field
                    .rules
                    .iter()
                    .find_map(|rule| rule(value).err())
                    .map(|message| FieldError {
                        field_name: field.name.clone(),
                        message,
                    })
            })
            .collect::<Vec<FieldError>>()
            .into()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        f.debug_struct("Validator").field("fields", &names).finish()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom rule over the field's value.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(Option<&FieldValue>) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.entry
            .rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// The field must have a non-empty value.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_some_and(|v| !v.is_empty()), msg)
    }

    /// Text must be at least `min` characters. Missing values pass.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.text_rule(move |s| s.chars().count() >= min, msg)
    }

    /// Text must match `re`. Missing and empty values pass.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.text_rule(move |s| s.is_empty() || re.is_match(s), msg)
    }

    /// Text must be an email address. Missing and empty values pass.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.text_rule(
            |s| s.is_empty() || email_address::EmailAddress::is_valid(s),
            msg,
        )
    }

    /// A checkbox must be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.and_then(FieldValue::as_bool) == Some(true), msg)
    }

    /// A multi-select must hold at least `min` identifiers.
    pub fn min_selected(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| v.and_then(FieldValue::as_ids).is_some_and(|ids| ids.len() >= min),
            msg,
        )
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        self.build().field(name)
    }

    /// Finish and return the validator.
    pub fn build(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }

    fn text_rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(
            move |v| match v.and_then(FieldValue::as_text) {
                Some(text) => f(text),
                None => true,
            },
            msg,
        )
    }
}
