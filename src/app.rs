//! Application state and event handling
//!
//! Keyboard and mouse input is translated into the three form events:
//! a field change, a submit, or a terms toggle.

use crate::platform::SHORTCUT_MODIFIER;
use crate::state::ui_area::{is_terms_link_column, radio_option_at, section_at, FormSection};
use crate::state::{AppState, FieldChange, FieldName, FormRow};
use crate::ui;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Main application struct
#[derive(Debug, Default)]
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Last known terminal size as (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Screen area of the form card for the current terminal size
    pub fn form_area(&self) -> Rect {
        // terminal_size is (height, width)
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        ui::form_area(Rect::new(0, 0, width, height), &self.state)
    }

    /// Handle a terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.reveal(self.state.active().into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let terms_were_shown = self.state.show_terms;
        self.dispatch_key(key);
        self.sync_scroll(terms_were_shown);
        Ok(())
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        // Shortcuts (work from any row). Ctrl+Alt is AltGr on some layouts
        // and types a character instead.
        let modifiers = key.modifiers;
        if modifiers.contains(SHORTCUT_MODIFIER) && !modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('s') => {
                    self.state.submit();
                }
                KeyCode::Char('t') => self.state.toggle_terms(),
                _ => {}
            }
            return;
        }

        let on_typed_field = self.state.active_field().is_some_and(FieldName::is_typed);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_row(),
            // Enter submits from any row, like implicit form submission
            KeyCode::Enter => {
                self.state.submit();
            }
            KeyCode::Left => self.state.cycle_active(false),
            KeyCode::Right => self.state.cycle_active(true),
            KeyCode::Char(' ') if self.state.active() == FormRow::Submit => {
                self.state.submit();
            }
            KeyCode::Char(' ') if !on_typed_field => self.state.cycle_active(true),
            KeyCode::Char(c) => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }

    /// Handle a mouse event. Clicks focus the section under the cursor and
    /// activate it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        let terms_were_shown = self.state.show_terms;
        match section_at(&self.state, self.form_area(), mouse.column, mouse.row) {
            Some(FormSection::Field(field)) => {
                self.state.focus(FormRow::Field(field));
                self.click_field(field, mouse.column);
            }
            Some(FormSection::Submit) => {
                self.state.focus(FormRow::Submit);
                self.state.submit();
            }
            _ => return Ok(()),
        }
        self.sync_scroll(terms_were_shown);
        Ok(())
    }

    fn click_field(&mut self, field: FieldName, column: u16) {
        match field {
            FieldName::Gender => {
                if let Some(gender) = radio_option_at(column) {
                    self.state.apply_change(FieldChange::Gender(gender));
                }
            }
            FieldName::Role => self.state.cycle_active(true),
            FieldName::AcceptTerms => {
                if is_terms_link_column(column) {
                    self.state.toggle_terms();
                } else {
                    self.state.cycle_active(true);
                }
            }
            _ => {}
        }
    }

    /// Scroll after an event: to the terms text when it was just opened,
    /// otherwise to the focused row.
    fn sync_scroll(&mut self, terms_were_shown: bool) {
        if self.state.show_terms && !terms_were_shown {
            self.reveal(FormSection::TermsBox);
        } else {
            self.reveal(self.state.active().into());
        }
    }

    fn reveal(&mut self, target: FormSection) {
        let rows = self.form_area().height.saturating_sub(2);
        self.state.reveal(target, rows);
    }
}
