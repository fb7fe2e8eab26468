//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use crate::state::ui_area::form_height;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Screen area of the form card inside a terminal of the given size
pub fn form_area(area: Rect, state: &AppState) -> Rect {
    layout::create_layout(area, form_height(state), state.submission.is_some()).form
}

/// Main draw function. Pure over the app state; called after every event.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = &app.state;

    let main = layout::create_layout(area, form_height(state), state.submission.is_some());

    forms::draw_registration_form(frame, main.form, app);

    if let (Some(summary_area), Some(submission)) = (main.summary, &state.submission) {
        summary::draw(frame, summary_area, submission);
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldChange, Gender, Role};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render_lines(app: &App, width: u16, height: u16) -> Vec<String> {
        render(app, width, height).lines().map(str::to_string).collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// App sized like a classic 80x24 terminal
    fn small_app(mut app: App) -> App {
        app.terminal_size = Some((24, 80));
        app
    }

    fn filled_app() -> App {
        let mut app = App::new();
        for change in [
            FieldChange::FullName("Ann".into()),
            FieldChange::Email("a@x.com".into()),
            FieldChange::Age("30".into()),
            FieldChange::Gender(Gender::Female),
            FieldChange::Role(Role::Student),
            FieldChange::AcceptTerms(true),
        ] {
            app.state.apply_change(change);
        }
        app
    }

    #[test]
    fn test_fresh_form_renders_fields_in_order() {
        let screen = render(&App::new(), 100, 40);
        let positions: Vec<usize> = [
            "Registration Form",
            "Full Name",
            "Email",
            "Age",
            "Gender",
            "Role",
            "Accept Terms",
            "Submit",
        ]
        .iter()
        .map(|label| screen.find(label).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(screen.contains("( ) Male   ( ) Female"));
        assert!(screen.contains("Select Role"));
        assert!(!screen.contains("Registration Summary"));
        assert!(!screen.contains("These are the Terms and Conditions."));
    }

    #[test]
    fn test_failed_submit_renders_inline_and_global_errors() {
        let mut app = App::new();
        app.state.submit();
        let screen = render(&app, 100, 40);
        for message in [
            "Full Name is required",
            "Email is required",
            "Age must be greater than 0",
            "Please select a gender",
            "You must accept the terms",
            "Please complete all required fields.",
        ] {
            assert!(screen.contains(message), "missing {message}");
        }
        let email_box = screen.find("Email").unwrap();
        let name_error = screen.find("Full Name is required").unwrap();
        assert!(name_error < email_box);
    }

    #[test]
    fn test_successful_submit_renders_summary() {
        let mut app = filled_app();
        assert!(app.state.submit());
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Registration Summary"));
        for value in [
            "Full Name: Ann",
            "Email: a@x.com",
            "Age: 30",
            "Gender: Female",
            "Role: Student",
            "Accepted Terms: Yes",
        ] {
            assert!(screen.contains(value), "missing {value}");
        }
    }

    #[test]
    fn test_summary_below_form_on_narrow_terminal() {
        let mut app = filled_app();
        app.state.submit();
        let screen = render(&app, 60, 50);
        let submit = screen.find("Submit").unwrap();
        let summary = screen.find("Registration Summary").unwrap();
        assert!(submit < summary);
    }

    #[test]
    fn test_terms_text_shown_when_toggled() {
        let mut app = App::new();
        app.state.toggle_terms();
        let screen = render(&app, 100, 40);
        assert!(screen.contains("These are the Terms and Conditions."));
        assert!(screen.contains("Please read carefully before accepting."));
    }

    #[test]
    fn test_status_bar_shows_shortcuts() {
        let screen = render(&App::new(), 100, 40);
        let last_line = screen.lines().last().unwrap();
        assert!(last_line.contains("Ctrl+S"));
        assert!(last_line.contains("Ctrl+T"));
    }

    mod small_terminal {
        use super::*;
        use crate::state::{FieldName, FormPhase, FormRow};
        use crossterm::event::{KeyCode, KeyEvent};
        use pretty_assertions::assert_eq;

        fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
            app.handle_key(KeyEvent::new(code, modifiers)).unwrap();
        }

        #[test]
        fn test_failed_submit_keeps_field_boxes_intact() {
            let mut app = small_app(App::new());
            press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

            let lines = render_lines(&app, 80, 24);
            // Full Name box on rows 1-3, its error on row 4, Email box on 5-7
            assert!(lines[1].contains("Full Name"));
            assert!(lines[2].contains("▌"));
            assert!(lines[4].contains("Full Name is required"));
            assert!(lines[6].contains("(empty)"));
            assert!(lines[16].contains("Please select a gender"));
            assert!(lines[22].contains("▼"));
        }

        #[test]
        fn test_focusing_submit_scrolls_to_global_error() {
            let mut app = small_app(App::new());
            press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
            press(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);

            let lines = render_lines(&app, 80, 24);
            assert!(lines[0].contains("▲"));
            assert!(lines[16].contains("You must accept the terms"));
            assert!(lines[18].contains("Submit"));
            assert!(lines[21].contains("Please complete all required fields."));
        }

        #[test]
        fn test_submitted_form_scrolls_above_summary() {
            let mut app = small_app(filled_app());
            app.state.focus(FormRow::Submit);
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
            assert_eq!(app.state.phase(), FormPhase::Submitted);

            let lines = render_lines(&app, 80, 24);
            // 13 form rows above a 10 row summary
            assert!(lines[3].contains("Student"));
            assert!(lines[6].contains("[x] Accept"));
            assert!(lines[9].contains("Submit"));
            assert!(lines[13].contains("Registration Summary"));
            assert!(lines[14].contains("Full Name: Ann"));
            assert!(lines[19].contains("Accepted Terms: Yes"));
            assert!(lines[21].contains("Submitted at"));
        }

        #[test]
        fn test_click_on_drawn_submit_button_submits() {
            let mut app = small_app(filled_app());
            app.state.focus(FormRow::Submit);
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
            assert!(render_lines(&app, 80, 24)[9].contains("Submit"));

            app.handle_mouse(click(4, 9)).unwrap();
            assert_eq!(app.state.active(), FormRow::Submit);
            assert_eq!(app.state.form.gender, Some(Gender::Female));
            assert_eq!(app.state.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_click_on_drawn_role_box_cycles_role() {
            let mut app = small_app(filled_app());
            app.state.focus(FormRow::Submit);
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

            app.handle_mouse(click(5, 3)).unwrap();
            assert_eq!(app.state.active_field(), Some(FieldName::Role));
            assert_eq!(app.state.form.role, Some(Role::Teacher));
        }

        #[test]
        fn test_click_on_summary_is_ignored() {
            let mut app = small_app(filled_app());
            app.state.focus(FormRow::Submit);
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

            app.handle_mouse(click(5, 15)).unwrap();
            assert_eq!(app.state.active(), FormRow::Submit);
            assert_eq!(app.state.form.role, Some(Role::Student));
        }

        #[test]
        fn test_terms_toggle_scrolls_terms_into_view() {
            let mut app = small_app(App::new());
            press(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);

            let lines = render_lines(&app, 80, 24);
            assert!(lines[0].contains("▲"));
            assert!(lines[19].contains("These are the Terms and Conditions."));
            assert!(lines[20].contains("Please read carefully before accepting."));
        }

        #[test]
        fn test_tabbing_back_to_top_scrolls_up() {
            let mut app = small_app(App::new());
            press(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
            assert_eq!(app.state.scroll_offset, 1);
            press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
            assert_eq!(app.state.scroll_offset, 0);
            assert!(render_lines(&app, 80, 24)[2].contains("▌"));
        }
    }
}
