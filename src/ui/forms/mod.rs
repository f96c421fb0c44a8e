//! Form rendering

mod field_renderer;
mod onboarding_form;

pub use onboarding_form::draw as draw_onboarding_form;
