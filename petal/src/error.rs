use thiserror::Error;

use crate::validation::FieldError;

/// Errors raised by widget configuration and form submission.
///
/// Selection events never fail; these cover the places where caller input
/// is parsed or checked.
#[derive(Debug, Error)]
pub enum PetalError {
    #[error("option must be a JSON object, got {0}")]
    InvalidOption(String),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid step {0}: must be a positive number")]
    InvalidStep(f64),

    #[error("{input:?} is not a number")]
    InvalidNumber { input: String },

    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Color(#[from] petaldom::ColorError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field_name, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
