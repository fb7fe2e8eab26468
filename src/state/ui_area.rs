//! Form layout shared by rendering and mouse handling
//!
//! Sections keep a fixed height. When the card is shorter than its content
//! the sections scroll by `AppState::scroll_offset`, and only sections that
//! fit entirely are drawn. Mouse hit-testing maps a position through the
//! same rectangles the renderer uses.
//!
//! # Layout
//!
//! ```text
//! Row 0:    Card top border (" Registration Form ")
//! Row 1+:   Sections, each of fixed height, scrolled:
//!           - field box (3 rows) followed by its error line (1 row, if failing)
//!           - terms box (4 rows, if visible)
//!           - submit button (3 rows)
//!           - divider (1 row)
//!           - global error (1 row, if present)
//! Bottom:   Card bottom border
//! ```

use super::{AppState, FieldName, FormRow, Gender};
use ratatui::layout::{Margin, Position, Rect};

/// Height of a bordered field box (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;
/// Height of the terms box (borders + two lines of text)
pub const TERMS_HEIGHT: u16 = 4;
/// Height of the submit button
pub const BUTTON_HEIGHT: u16 = 3;
/// Width of the form card
pub const FORM_WIDTH: u16 = 56;
/// Width of the summary card when it sits beside the form
pub const SUMMARY_WIDTH: u16 = 40;
/// First column inside a field box (card border + field border)
pub const FIELD_TEXT_LEFT: u16 = 2;

/// Text before the terms link on the checkbox row
pub const CHECKBOX_PREFIX_WIDTH: u16 = 11; // "[x] Accept "
/// Clickable terms link on the checkbox row
pub const TERMS_LINK: &str = "Terms and Conditions";
/// Spacing between radio options
pub const RADIO_GAP: u16 = 3;

/// A vertical section of the form card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Field(FieldName),
    FieldError(FieldName),
    TermsBox,
    Submit,
    Divider,
    GlobalError,
}

impl From<FormRow> for FormSection {
    fn from(row: FormRow) -> Self {
        match row {
            FormRow::Field(field) => Self::Field(field),
            FormRow::Submit => Self::Submit,
        }
    }
}

impl FormSection {
    pub fn height(self) -> u16 {
        match self {
            Self::Field(_) => FIELD_HEIGHT,
            Self::TermsBox => TERMS_HEIGHT,
            Self::Submit => BUTTON_HEIGHT,
            Self::FieldError(_) | Self::Divider | Self::GlobalError => 1,
        }
    }
}

/// Sections of the form card in render order for the given state
pub fn form_sections(state: &AppState) -> Vec<FormSection> {
    let mut sections = Vec::with_capacity(FieldName::ALL.len() * 2 + 4);
    for field in FieldName::ALL {
        sections.push(FormSection::Field(field));
        if state.errors.contains_key(&field) {
            sections.push(FormSection::FieldError(field));
        }
        if field == FieldName::AcceptTerms && state.show_terms {
            sections.push(FormSection::TermsBox);
        }
    }
    sections.push(FormSection::Submit);
    sections.push(FormSection::Divider);
    if state.global_error.is_some() {
        sections.push(FormSection::GlobalError);
    }
    sections
}

/// Total height of the form card including its borders
pub fn form_height(state: &AppState) -> u16 {
    content_height(state) + 2
}

/// Height of all sections stacked, before any scrolling
pub fn content_height(state: &AppState) -> u16 {
    form_sections(state).iter().map(|s| s.height()).sum()
}

/// Content rows `top..bottom` taken by `target` together with the lines
/// that belong to it: a field's error line, the terms box after the
/// checkbox, and the divider and global error after Submit.
pub fn section_rows(state: &AppState, target: FormSection) -> Option<(u16, u16)> {
    let mut top = 0;
    let mut start = None;
    for section in form_sections(state) {
        match start {
            None if section == target => start = Some(top),
            Some(_) if belongs_to(target, section) => {}
            Some(first) => return Some((first, top)),
            None => {}
        }
        top += section.height();
    }
    start.map(|first| (first, top))
}

fn belongs_to(owner: FormSection, section: FormSection) -> bool {
    match (owner, section) {
        (FormSection::Field(field), FormSection::FieldError(failing)) => field == failing,
        (FormSection::Field(FieldName::AcceptTerms), FormSection::TermsBox) => true,
        (FormSection::Submit, FormSection::Divider | FormSection::GlobalError) => true,
        _ => false,
    }
}

/// Scroll offset in effect for a viewport of `rows` content rows
pub fn clamp_scroll(state: &AppState, rows: u16) -> u16 {
    state
        .scroll_offset
        .min(content_height(state).saturating_sub(rows))
}

/// Sections that fit entirely inside the form card at the current scroll
/// offset, with their screen areas. Sections cut by the card edge are left
/// out.
pub fn visible_sections(state: &AppState, form: Rect) -> Vec<(FormSection, Rect)> {
    let inner = form.inner(Margin::new(1, 1));
    let offset = clamp_scroll(state, inner.height);

    let mut visible = Vec::new();
    let mut top = 0;
    for section in form_sections(state) {
        let height = section.height();
        if top >= offset {
            let row = top - offset;
            if row + height > inner.height {
                break;
            }
            visible.push((
                section,
                Rect {
                    y: inner.y + row,
                    height,
                    ..inner
                },
            ));
        }
        top += height;
    }
    visible
}

/// Whether content is scrolled out of the card (above, below)
pub fn hidden_content(state: &AppState, form: Rect) -> (bool, bool) {
    let rows = form.height.saturating_sub(2);
    let offset = clamp_scroll(state, rows);
    (offset > 0, offset + rows < content_height(state))
}

/// Section under a screen position
pub fn section_at(state: &AppState, form: Rect, column: u16, row: u16) -> Option<FormSection> {
    visible_sections(state, form)
        .into_iter()
        .find(|(_, area)| area.contains(Position::new(column, row)))
        .map(|(section, _)| section)
}

/// Label of a radio option as rendered (without selection state)
pub fn radio_option_width(gender: Gender) -> u16 {
    // "(•) " + label
    4 + gender.label().len() as u16
}

/// Radio option under an absolute screen column
pub fn radio_option_at(column: u16) -> Option<Gender> {
    let mut left = FIELD_TEXT_LEFT;
    for gender in Gender::ALL {
        let right = left + radio_option_width(gender);
        if column >= left && column < right {
            return Some(gender);
        }
        left = right + RADIO_GAP;
    }
    None
}

/// Whether an absolute screen column on the checkbox row hits the terms link
pub fn is_terms_link_column(column: u16) -> bool {
    let left = FIELD_TEXT_LEFT + CHECKBOX_PREFIX_WIDTH;
    column >= left && column < left + TERMS_LINK.len() as u16
}
