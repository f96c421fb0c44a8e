//! Onboarding form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{FieldId, SUBMIT_INDEX};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card dimensions
const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 20;

/// Draw the onboarding card centered in the available area
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = centered_card(area);

    let block = Block::default()
        .title(" Onboarding Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // first/last name row
            Constraint::Length(1),             // name error row
            Constraint::Length(3),             // phone
            Constraint::Length(1),             // phone error
            Constraint::Length(3),             // corporation number
            Constraint::Length(1),             // corporation error
            Constraint::Length(BUTTON_HEIGHT), // submit
            Constraint::Length(1),             // help
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let form = &app.state.form;
    let active = form.active_field_index;

    // First and last name side by side, like the error row beneath them
    let name_fields = split_pair(chunks[0]);
    let name_errors = split_pair(chunks[1]);
    draw_field(frame, name_fields[0], &form.first_name, active == 0);
    draw_field(frame, name_fields[1], &form.last_name, active == 1);
    draw_field_error(
        frame,
        name_errors[0],
        &form.first_name,
        FieldId::FirstName.error_message(),
    );
    draw_field_error(
        frame,
        name_errors[1],
        &form.last_name,
        FieldId::LastName.error_message(),
    );

    draw_field(frame, chunks[2], &form.phone_number, active == 2);
    draw_field_error(
        frame,
        chunks[3],
        &form.phone_number,
        FieldId::PhoneNumber.error_message(),
    );

    draw_field(frame, chunks[4], &form.corporation_number, active == 3);
    draw_field_error(
        frame,
        chunks[5],
        &form.corporation_number,
        FieldId::CorporationNumber.error_message(),
    );

    let label = if app.state.is_submitting() {
        "Submitting..."
    } else {
        "Submit ➔"
    };
    render_button(
        frame,
        chunks[6],
        label,
        active == SUBMIT_INDEX,
        !app.state.is_submitting(),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[7]);
}

/// Split a row into two equal halves with a small gap
fn split_pair(area: Rect) -> [Rect; 2] {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(area);
    [halves[0], halves[1]]
}

/// Center the card in the available area, clamped to the terminal size
fn centered_card(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_card_fits_small_terminals() {
        let card = centered_card(Rect::new(0, 0, 20, 10));
        assert!(card.width <= 20);
        assert!(card.height <= 10);
    }

    #[test]
    fn test_centered_card_is_centered() {
        let card = centered_card(Rect::new(0, 0, 100, 40));
        assert_eq!(card.width, CARD_WIDTH);
        assert_eq!(card.height, CARD_HEIGHT);
        assert_eq!(card.x, (100 - CARD_WIDTH) / 2);
    }
}
