//! Dialog components

mod base;
mod notification_dialog;

pub use notification_dialog::render_notification_dialog;
