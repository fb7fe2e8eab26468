//! Field rendering utilities for forms

use crate::state::ui_area::{RADIO_GAP, TERMS_LINK};
use crate::state::{FieldKind, FieldName, FormState, Gender, Role, ValidationError};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn active_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a form field boxed with its label as the title
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FieldName,
    is_active: bool,
) {
    let content = match field.kind() {
        FieldKind::Text | FieldKind::Number => text_line(form.text(field).unwrap_or(""), is_active),
        FieldKind::Radio => radio_line(form.gender, is_active),
        FieldKind::Select => select_line(form.role, is_active),
        FieldKind::Checkbox => checkbox_line(form.accept_terms, is_active),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(active_style(is_active));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn text_line(value: &str, is_active: bool) -> Line<'_> {
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    Line::from(vec![
        Span::styled(display_value, active_style(is_active)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn radio_line(selected: Option<Gender>, is_active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(Gender::ALL.len() * 2);
    for (i, gender) in Gender::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(RADIO_GAP as usize)));
        }
        let is_selected = selected == Some(gender);
        let mark = if is_selected { "•" } else { " " };
        let style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            active_style(is_active)
        };
        spans.push(Span::styled(format!("({mark}) {}", gender.label()), style));
    }
    Line::from(spans)
}

fn select_line(selected: Option<Role>, is_active: bool) -> Line<'static> {
    let value = match selected {
        Some(role) => Span::styled(role.label(), Style::default().fg(Color::White)),
        None => Span::styled(Role::PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    };
    let arrows = if is_active { "  ◂ ▸" } else { "  ▾" };
    Line::from(vec![value, Span::styled(arrows, active_style(is_active))])
}

fn checkbox_line(checked: bool, is_active: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    Line::from(vec![
        Span::styled(mark, active_style(is_active)),
        Span::raw("Accept "),
        Span::styled(
            TERMS_LINK,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

/// Draw the inline error shown directly below a failing field
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: &ValidationError) {
    let error = Paragraph::new(Line::from(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(error, area);
}
