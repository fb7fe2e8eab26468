//! Registration summary card

use crate::state::{FieldName, Submission};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the read-only summary of the last accepted submission
pub fn draw(frame: &mut Frame, area: Rect, submission: &Submission) {
    let block = Block::default()
        .title(Span::styled(
            " Registration Summary ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(summary_lines(submission))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn summary_lines(submission: &Submission) -> Vec<Line<'static>> {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let form = &submission.form;

    let mut lines: Vec<Line> = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Age,
        FieldName::Gender,
        FieldName::Role,
    ]
    .into_iter()
    .map(|field| {
        Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::raw(form.display_value(field)),
        ])
    })
    .collect();

    // Only reachable with the terms accepted
    lines.push(Line::from(vec![
        Span::styled("Accepted Terms: ", label_style),
        Span::raw("Yes"),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Submitted at {}",
            submission.submitted_at.format("%Y-%m-%d %H:%M:%S")
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
