//! Application state definitions

use super::forms::{
    validate, FieldChange, FieldErrors, FieldName, FormState, GLOBAL_ERROR_MESSAGE,
};
use super::ui_area::{clamp_scroll, section_rows, FormSection};
use chrono::{DateTime, Local};

/// Focusable rows of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(FieldName),
    Submit,
}

impl FormRow {
    pub const COUNT: usize = FieldName::ALL.len() + 1;

    pub fn from_index(index: usize) -> Self {
        FieldName::ALL
            .get(index)
            .copied()
            .map(FormRow::Field)
            .unwrap_or(FormRow::Submit)
    }

    pub fn index(self) -> usize {
        match self {
            FormRow::Field(field) => FieldName::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or_default(),
            FormRow::Submit => FieldName::ALL.len(),
        }
    }
}

/// Where the form is in its lifecycle. Terms visibility is orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing { errors_shown: bool },
    Submitted,
}

/// Snapshot of the form taken when a submit attempt passes validation
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub form: FormState,
    pub submitted_at: DateTime<Local>,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form values
    pub form: FormState,

    // Result of the last submit attempt
    pub errors: FieldErrors,
    pub global_error: Option<String>,
    pub submission: Option<Submission>,

    // UI state
    pub show_terms: bool,
    pub active_row: usize,
    /// Form content rows scrolled above the top of the card
    pub scroll_offset: u16,
}

impl AppState {
    /// Replace one field. Errors from the last submit stay as they are.
    pub fn apply_change(&mut self, change: FieldChange) {
        tracing::debug!(field = change.field().key(), "field changed");
        self.form = self.form.update(change);
    }

    /// Validate and either record the errors or take a snapshot.
    ///
    /// Returns whether the form was accepted.
    pub fn submit(&mut self) -> bool {
        let validation = validate(&self.form);

        if validation.is_valid() {
            self.errors.clear();
            self.global_error = None;
            self.submission = Some(Submission {
                form: self.form.clone(),
                submitted_at: Local::now(),
            });
            tracing::info!("registration submitted");
            true
        } else {
            self.global_error = validation
                .all_fields_empty
                .then(|| GLOBAL_ERROR_MESSAGE.to_string());
            tracing::info!(
                failing = validation.errors.len(),
                all_fields_empty = validation.all_fields_empty,
                "registration rejected"
            );
            self.errors = validation.errors;
            self.submission = None;
            false
        }
    }

    /// Show or hide the terms text
    pub fn toggle_terms(&mut self) {
        self.show_terms = !self.show_terms;
    }

    pub fn phase(&self) -> FormPhase {
        if self.submission.is_some() {
            FormPhase::Submitted
        } else {
            FormPhase::Editing {
                errors_shown: !self.errors.is_empty() || self.global_error.is_some(),
            }
        }
    }

    /// Currently focused row
    pub fn active(&self) -> FormRow {
        FormRow::from_index(self.active_row)
    }

    /// Currently focused field, if the focus is not on the submit button
    pub fn active_field(&self) -> Option<FieldName> {
        match self.active() {
            FormRow::Field(field) => Some(field),
            FormRow::Submit => None,
        }
    }

    pub fn focus(&mut self, row: FormRow) {
        self.active_row = row.index();
    }

    /// Move to next form row
    pub fn next_row(&mut self) {
        self.active_row = (self.active_row + 1) % FormRow::COUNT;
    }

    /// Move to previous form row
    pub fn prev_row(&mut self) {
        if self.active_row == 0 {
            self.active_row = FormRow::COUNT - 1;
        } else {
            self.active_row -= 1;
        }
    }

    /// Scroll the form just enough for `target` and the lines that belong
    /// to it to fit in a card with `rows` content rows
    pub fn reveal(&mut self, target: FormSection, rows: u16) {
        let mut offset = clamp_scroll(self, rows);
        if let Some((top, bottom)) = section_rows(self, target) {
            if bottom > offset + rows {
                offset = bottom - rows;
            }
            // The top of the section wins when it is taller than the card
            offset = offset.min(top);
        }
        self.scroll_offset = offset;
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(change) = self
            .active_field()
            .and_then(|field| self.form.typed_char(field, c))
        {
            self.apply_change(change);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(change) = self
            .active_field()
            .and_then(|field| self.form.backspace(field))
        {
            self.apply_change(change);
        }
    }

    /// Select the next/previous option of the focused radio group or
    /// select, or toggle the focused checkbox
    pub fn cycle_active(&mut self, forward: bool) {
        if let Some(change) = self
            .active_field()
            .and_then(|field| self.form.cycled(field, forward))
        {
            self.apply_change(change);
        }
    }
}
