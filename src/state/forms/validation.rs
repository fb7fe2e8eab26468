//! Submit-time validation of the registration form

use super::field::FieldName;
use super::form_state::FormState;
use std::collections::BTreeMap;
use thiserror::Error;

/// Message shown when every field is still at its default value
pub const GLOBAL_ERROR_MESSAGE: &str = "Please complete all required fields.";

/// A failed field rule. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Age must be greater than 0")]
    AgeNotPositive,
    #[error("Please select a gender")]
    GenderRequired,
    #[error("You must accept the terms")]
    TermsNotAccepted,
}

/// Failing fields of the last submit attempt, keyed in display order
pub type FieldErrors = BTreeMap<FieldName, ValidationError>;

/// Outcome of validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    /// Every field, role included, is still at its default value
    pub all_fields_empty: bool,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every rule independently. Role is never required.
pub fn validate(form: &FormState) -> Validation {
    let mut errors = FieldErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert(FieldName::FullName, ValidationError::FullNameRequired);
    }
    if form.email.trim().is_empty() {
        errors.insert(FieldName::Email, ValidationError::EmailRequired);
    }
    if !parse_age(&form.age).is_some_and(|age| age > 0.0) {
        errors.insert(FieldName::Age, ValidationError::AgeNotPositive);
    }
    if form.gender.is_none() {
        errors.insert(FieldName::Gender, ValidationError::GenderRequired);
    }
    if !form.accept_terms {
        errors.insert(FieldName::AcceptTerms, ValidationError::TermsNotAccepted);
    }

    let all_fields_empty = form.full_name.is_empty()
        && form.email.is_empty()
        && form.age.is_empty()
        && form.gender.is_none()
        && form.role.is_none()
        && !form.accept_terms;

    Validation {
        errors,
        all_fields_empty,
    }
}

/// Numeric value of the age text. Text that is not a valid floating-point
/// number reads as empty, the way a numeric input reports it.
fn parse_age(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !is_float_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `-?(D | D.D | .D)([eE][+-]?D)?` where `D` is one or more ASCII digits.
/// Stricter than `str::parse::<f64>`, which also takes "+5", "5." and "inf".
fn is_float_literal(text: &str) -> bool {
    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || digits(int)) && digits(frac),
        None => digits(mantissa),
    };
    let exponent_ok = match exponent {
        Some(exp) => digits(exp.strip_prefix(['+', '-']).unwrap_or(exp)),
        None => true,
    };
    mantissa_ok && exponent_ok
}
