//! Form domain layer
//!
//! Typed registration fields, the form value record with its single update
//! operation, and submit-time validation.

mod field;
mod form_state;
mod validation;

pub use field::{FieldChange, FieldKind, FieldName, Gender, Role};
pub use form_state::FormState;
pub use validation::{validate, FieldErrors, ValidationError, GLOBAL_ERROR_MESSAGE};
