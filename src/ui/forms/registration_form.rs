//! Registration form card rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::ui_area::{hidden_content, visible_sections, FormSection};
use crate::state::FormRow;
use crate::ui::components::render_button;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terms text revealed by the terms link
const TERMS_TEXT: [&str; 2] = [
    "These are the Terms and Conditions.",
    "Please read carefully before accepting.",
];

/// Draw the form card: fields, inline errors, terms, submit, divider and
/// the global error, scrolled to the state's offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;

    let mut block = Block::default()
        .title(Span::styled(
            " Registration Form ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let (hidden_above, hidden_below) = hidden_content(state, area);
    if hidden_above {
        block = block.title(Line::from(" ▲ ").right_aligned());
    }
    if hidden_below {
        block = block.title_bottom(Line::from(" ▼ ").right_aligned());
    }
    frame.render_widget(block, area);

    let active = state.active();
    for (section, chunk) in visible_sections(state, area) {
        match section {
            FormSection::Field(field) => draw_field(
                frame,
                chunk,
                &state.form,
                field,
                active == FormRow::Field(field),
            ),
            FormSection::FieldError(field) => {
                if let Some(error) = state.errors.get(&field) {
                    draw_field_error(frame, chunk, error);
                }
            }
            FormSection::TermsBox => draw_terms(frame, chunk),
            FormSection::Submit => render_button(
                frame,
                Rect {
                    width: chunk.width.min(12),
                    ..chunk
                },
                "Submit",
                active == FormRow::Submit,
                Color::Green,
            ),
            FormSection::Divider => {
                let divider = Paragraph::new("─".repeat(chunk.width as usize))
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(divider, chunk);
            }
            FormSection::GlobalError => {
                if let Some(message) = &state.global_error {
                    let error = Paragraph::new(Line::from(Span::styled(
                        message.as_str(),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )));
                    frame.render_widget(error, chunk);
                }
            }
        }
    }
}

fn draw_terms(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = TERMS_TEXT.iter().map(|l| Line::from(*l)).collect();
    let terms = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(terms, area);
}
