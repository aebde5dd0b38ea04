use crate::error::PetalError;

/// A field that failed validation, with the message of its first failing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

/// Outcome of running a [`Validator`](super::Validator) over form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    /// At most one error per field, in rule declaration order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn error_for(&self, field_name: &str) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field_name == field_name)
    }

    /// `Err(PetalError::Validation)` when any field failed.
    pub fn into_result(self) -> Result<(), PetalError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(PetalError::Validation(errors)),
        }
    }
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}
