//! Form validation.
//!
//! Rules run against a [`FormData`](crate::form::FormData) snapshot; the
//! first failing rule of each field is reported.
//!
//! # Example
//!
//! ```ignore
//! use petal::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field("userEmail")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .field("fruit")
//!         .required("Pick a fruit")
//!     .build();
//!
//! let form = Form::new().validator(validator);
//! ```

mod result;
mod validator;

pub use regex::Regex;
pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};
