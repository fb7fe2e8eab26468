//! Registration form values and the single field update operation

use super::field::{is_numeric_input_char, FieldChange, FieldName, Gender, Role};

/// Current value of every registration field.
///
/// A fresh form is empty: blank text, no gender or role, terms unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    /// Numeric text as typed; may hold transient invalid input such as "-5"
    pub age: String,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub accept_terms: bool,
}

impl FormState {
    /// Return a copy of the form with exactly the changed field replaced.
    ///
    /// No validation happens here.
    pub fn update(&self, change: FieldChange) -> FormState {
        let mut next = self.clone();
        match change {
            FieldChange::FullName(v) => next.full_name = v,
            FieldChange::Email(v) => next.email = v,
            FieldChange::Age(v) => next.age = v,
            FieldChange::Gender(g) => next.gender = Some(g),
            FieldChange::Role(r) => next.role = Some(r),
            FieldChange::AcceptTerms(checked) => next.accept_terms = checked,
        }
        next
    }

    /// Text of a typed field (`None` for choice fields)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::Age => Some(&self.age),
            _ => None,
        }
    }

    /// Change event produced by typing `c` into `field`.
    ///
    /// Returns `None` when the field does not take typed input, or when the
    /// character is not accepted by a numeric field.
    pub fn typed_char(&self, field: FieldName, c: char) -> Option<FieldChange> {
        if field == FieldName::Age && !is_numeric_input_char(c) {
            return None;
        }
        let mut value = self.text(field)?.to_string();
        value.push(c);
        Some(text_change(field, value))
    }

    /// Change event produced by pressing backspace in `field`
    pub fn backspace(&self, field: FieldName) -> Option<FieldChange> {
        let mut value = self.text(field)?.to_string();
        value.pop()?;
        Some(text_change(field, value))
    }

    /// Change event selecting the next (or previous) option of a radio
    /// group or select. Checkboxes are toggled regardless of direction.
    pub fn cycled(&self, field: FieldName, forward: bool) -> Option<FieldChange> {
        match field {
            FieldName::Gender => Some(FieldChange::Gender(if forward {
                Gender::next(self.gender)
            } else {
                Gender::prev(self.gender)
            })),
            FieldName::Role => Some(FieldChange::Role(if forward {
                Role::next(self.role)
            } else {
                Role::prev(self.role)
            })),
            FieldName::AcceptTerms => Some(FieldChange::AcceptTerms(!self.accept_terms)),
            _ => None,
        }
    }

    /// Value as echoed back in the summary card
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::FullName => self.full_name.clone(),
            FieldName::Email => self.email.clone(),
            FieldName::Age => self.age.clone(),
            FieldName::Gender => self.gender.map(Gender::label).unwrap_or("").to_string(),
            FieldName::Role => self.role.map(Role::label).unwrap_or("").to_string(),
            FieldName::AcceptTerms => if self.accept_terms { "Yes" } else { "No" }.to_string(),
        }
    }
}

fn text_change(field: FieldName, value: String) -> FieldChange {
    match field {
        FieldName::Email => FieldChange::Email(value),
        FieldName::Age => FieldChange::Age(value),
        _ => FieldChange::FullName(value),
    }
}
