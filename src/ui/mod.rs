//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    forms::draw_onboarding_form(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);

    // Notification dialog goes on top of everything
    if let Some(notification) = &app.state.notification {
        components::render_notification_dialog(frame, notification);
    }
}

/// Draw the one-line status bar at the bottom
fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let text = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            " Ready",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(text), area);
}
