//! Values that flow between widgets and forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PetalError;

/// Attribute holding an option's display text.
pub const NAME_ATTRIBUTE: &str = "name";

/// Default attribute holding an option's identifier.
pub const DEFAULT_ID_ATTRIBUTE: &str = "id";

/// Identifier of a selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    /// Read an identifier out of a JSON attribute. Only strings and integers qualify.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Number),
            _ => None,
        }
    }

    /// The empty text identifier, which counts as "no value".
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<Identifier> for Value {
    fn from(id: Identifier) -> Self {
        match id {
            Identifier::Number(n) => Value::from(n),
            Identifier::Text(s) => Value::String(s),
        }
    }
}

/// A selectable record: a display `name` plus arbitrary attributes, one of
/// which serves as the identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionRecord {
    attributes: Map<String, Value>,
}

impl OptionRecord {
    /// Create an option with `id` and `name` attributes.
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>) -> Self {
        let id: Identifier = id.into();
        let name: String = name.into();
        Self::default()
            .with_attribute(DEFAULT_ID_ATTRIBUTE, id)
            .with_attribute(NAME_ATTRIBUTE, name)
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Build an option from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, PetalError> {
        match value {
            Value::Object(attributes) => Ok(Self { attributes }),
            other => Err(PetalError::InvalidOption(other.to_string())),
        }
    }

    /// Parse a JSON array of option objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, PetalError> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        values.into_iter().map(Self::from_value).collect()
    }

    /// Display text. Missing or non-string names read as empty.
    pub fn name(&self) -> &str {
        self.attributes
            .get(NAME_ATTRIBUTE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The identifier stored under `id_attribute`, if it is a string or integer.
    pub fn identifier(&self, id_attribute: &str) -> Option<Identifier> {
        self.attributes.get(id_attribute).and_then(Identifier::from_json)
    }
}

/// Initial selection handed to a selection widget.
///
/// A single identifier and a sequence are both accepted; [`normalize`](Self::normalize)
/// turns either into the ordered selection set.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionSeed {
    #[default]
    Empty,
    One(Identifier),
    Many(Vec<Identifier>),
}

impl SelectionSeed {
    pub fn normalize(self) -> Vec<Identifier> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(id) if id.is_blank() => Vec::new(),
            Self::One(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }
}

impl From<Identifier> for SelectionSeed {
    fn from(id: Identifier) -> Self {
        Self::One(id)
    }
}

impl From<&str> for SelectionSeed {
    fn from(s: &str) -> Self {
        Self::One(s.into())
    }
}

impl From<String> for SelectionSeed {
    fn from(s: String) -> Self {
        Self::One(s.into())
    }
}

impl From<i64> for SelectionSeed {
    fn from(n: i64) -> Self {
        Self::One(n.into())
    }
}

impl<T: Into<Identifier>> From<Vec<T>> for SelectionSeed {
    fn from(ids: Vec<T>) -> Self {
        Self::Many(ids.into_iter().map(Into::into).collect())
    }
}

/// A field value as published to a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Number(f64),
    Id(Identifier),
    Ids(Vec<Identifier>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<&Identifier> {
        match self {
            Self::Id(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_ids(&self) -> Option<&[Identifier]> {
        match self {
            Self::Ids(ids) => Some(ids),
            _ => None,
        }
    }

    /// Empty text, blank identifiers and empty selections count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Id(id) => id.is_blank(),
            Self::Ids(ids) => ids.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}
