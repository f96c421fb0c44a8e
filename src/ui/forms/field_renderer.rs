//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line input using FormField from the domain layer.
///
/// An invalid field gets a red border whether or not it is focused, so the
/// error state survives moving focus elsewhere.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_color = if field.has_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value().to_string(), value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), area);
}

/// Draw the inline error line beneath a field, if the field has been
/// evaluated and found invalid
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &FormField, message: &str) {
    if !field.has_error() {
        return;
    }
    let error = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(error, area);
}
