//! Submission outcome dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{style::Color, Frame};

/// Render the submit outcome as a centered modal dialog
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let (title, accent_color, message) = match notification {
        Notification::Success(message) => ("Success", Color::Green, message.as_str()),
        Notification::Failure(message) => ("Submission Failed", Color::Red, message.as_str()),
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent_color,
            message,
            max_width: 60,
        },
    );
}
