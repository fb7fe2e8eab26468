//! Layout components (form and summary cards, status bar)

use crate::app::App;
use crate::platform::{QUIT_HINT, SUBMIT_SHORTCUT, TERMS_SHORTCUT};
use crate::state::ui_area::{FORM_WIDTH, SUMMARY_WIDTH};
use crate::state::{FieldKind, FormPhase, FormRow};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas for the form card and, when a submission exists, the summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub form: Rect,
    pub summary: Option<Rect>,
}

/// Create the main layout.
///
/// The form is anchored top-left. The summary sits to its right when the
/// terminal is wide enough, otherwise below it. When stacked, the summary
/// keeps its full height and the form scrolls in the rows left above it.
pub fn create_layout(area: Rect, form_height: u16, has_summary: bool) -> MainLayout {
    // Reserve bottom line for status bar
    let content = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let form_width = FORM_WIDTH.min(content.width);

    if !has_summary {
        return MainLayout {
            form: Rect {
                width: form_width,
                height: form_height.min(content.height),
                ..content
            },
            summary: None,
        };
    }

    if content.width >= FORM_WIDTH + SUMMARY_WIDTH {
        return MainLayout {
            form: Rect {
                width: FORM_WIDTH,
                height: form_height.min(content.height),
                ..content
            },
            summary: Some(Rect {
                x: content.x + FORM_WIDTH,
                width: SUMMARY_WIDTH,
                height: SUMMARY_HEIGHT.min(content.height),
                ..content
            }),
        };
    }

    let summary_height = SUMMARY_HEIGHT.min(content.height);
    let form_height = form_height.min(content.height - summary_height);
    MainLayout {
        form: Rect {
            width: form_width,
            height: form_height,
            ..content
        },
        summary: Some(Rect {
            y: content.y + form_height,
            width: form_width,
            height: summary_height,
            ..content
        }),
    }
}

/// Summary card height: six fields, a blank line, the timestamp, borders
const SUMMARY_HEIGHT: u16 = 10;

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled(" Tab", key_style),
        Span::raw(":next  "),
    ];

    let row_hint = match app.state.active() {
        FormRow::Field(field) => match field.kind() {
            FieldKind::Text | FieldKind::Number => None,
            FieldKind::Radio | FieldKind::Select => Some(("←/→", ":choose  ")),
            FieldKind::Checkbox => Some(("Space", ":check  ")),
        },
        FormRow::Submit => None,
    };
    if let Some((key, label)) = row_hint {
        spans.push(Span::styled(key, key_style));
        spans.push(Span::raw(label));
    }

    spans.extend([
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled(SUBMIT_SHORTCUT, key_style),
        Span::raw(":submit  "),
        Span::styled(TERMS_SHORTCUT, key_style),
        Span::raw(":terms"),
    ]);

    match app.state.phase() {
        FormPhase::Submitted => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("submitted", Style::default().fg(Color::Green)));
        }
        FormPhase::Editing { errors_shown: true } => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("fix highlighted fields", Style::default().fg(Color::Red)));
        }
        FormPhase::Editing { errors_shown: false } => {}
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(QUIT_HINT.len() as u16),
        y: area.height.saturating_sub(1),
        width: (QUIT_HINT.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
