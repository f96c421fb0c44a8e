//! Application state and core logic

use crate::api::{OnboardingApi, ProfileDetails};
use crate::state::{
    normalize_phone, validate_canadian_phone, validate_corporation_number_format, validate_name,
    AppState, FieldId, Notification, SubmitPhase, ValidationReport,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the onboarding API
    pub api: Box<dyn OnboardingApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Box<dyn OnboardingApi>) -> Self {
        Self {
            state: AppState::default(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // A pending notification is modal: it swallows everything except
        // its dismissal keys
        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => {
                if self.state.form.is_submit_active() {
                    self.submit().await;
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Move focus forward: blur-validate the field being left, then
    /// normalize the phone field if focus lands on it
    fn focus_next(&mut self) {
        self.validate_on_blur();
        self.state.form.next_field();
        self.normalize_on_focus();
    }

    /// Move focus backward, with the same blur/focus side effects
    fn focus_prev(&mut self) {
        self.validate_on_blur();
        self.state.form.prev_field();
        self.normalize_on_focus();
    }

    /// Run the synchronous validator for the field losing focus.
    ///
    /// Names and phone get their full local rule; the corporation number
    /// gets the format pre-check only, so blur never suspends. The remote
    /// lookup runs on submit.
    fn validate_on_blur(&mut self) {
        let Some(id) = self.state.form.active_field() else {
            return;
        };
        let valid = {
            let value = self.state.form.field(id).as_text();
            match id {
                FieldId::FirstName | FieldId::LastName => validate_name(value),
                FieldId::PhoneNumber => validate_canadian_phone(value),
                FieldId::CorporationNumber => validate_corporation_number_format(value),
            }
        };
        self.state.form.field_mut(id).set_validity(valid);
    }

    /// Re-normalize the phone field when it gains focus (only once edited,
    /// so an untouched field stays unset)
    fn normalize_on_focus(&mut self) {
        if self.state.form.active_field() != Some(FieldId::PhoneNumber) {
            return;
        }
        let field = &mut self.state.form.phone_number;
        if field.value.is_some() {
            let normalized = normalize_phone(field.as_text());
            field.set_text(normalized);
        }
    }

    /// Handle character input in the active field
    fn input_char(&mut self, c: char) {
        let Some(id) = self.state.form.active_field() else {
            return;
        };
        match id {
            FieldId::PhoneNumber => {
                let field = &mut self.state.form.phone_number;
                field.push_char(c);
                let normalized = normalize_phone(field.as_text());
                field.set_text(normalized);
            }
            // The corporation number input accepts digits only
            FieldId::CorporationNumber => {
                if c.is_ascii_digit() {
                    self.state.form.corporation_number.push_char(c);
                }
            }
            _ => self.state.form.field_mut(id).push_char(c),
        }
    }

    /// Handle backspace in the active field
    fn backspace(&mut self) {
        let Some(id) = self.state.form.active_field() else {
            return;
        };
        let field = self.state.form.field_mut(id);
        field.pop_char();
        if id == FieldId::PhoneNumber && field.value.is_some() {
            let normalized = normalize_phone(field.as_text());
            field.set_text(normalized);
        }
    }

    /// Run one submit attempt: recompute all four validations from current
    /// values, and only if all pass, post the profile.
    ///
    /// Re-entry while an attempt is in flight is a no-op, so attempts are
    /// serialized and at most one registry call and one profile call happen
    /// per attempt. Results arriving for a superseded attempt are discarded.
    pub async fn submit(&mut self) {
        if self.state.is_submitting() {
            return;
        }
        self.state.submit_phase = SubmitPhase::Validating;
        self.state.submit_attempt += 1;
        let attempt = self.state.submit_attempt;
        self.state.status_message = Some("Validating...".to_string());

        let first_name = validate_name(self.state.form.first_name.as_text());
        let last_name = validate_name(self.state.form.last_name.as_text());
        let phone_number = validate_canadian_phone(self.state.form.phone_number.as_text());

        // Empty or malformed corporation numbers fail fast, no registry call
        let corp_value = self.state.form.corporation_number.as_text().to_string();
        let corporation_number = if !validate_corporation_number_format(&corp_value) {
            false
        } else {
            self.api
                .lookup_corporation_number(&corp_value)
                .await
                .unwrap_or(false)
        };

        if self.state.submit_attempt != attempt {
            return;
        }

        // Apply all four flags in one pass so a single re-render shows the
        // full outcome of the attempt
        let report = ValidationReport {
            first_name,
            last_name,
            phone_number,
            corporation_number,
        };
        self.state.form.apply_report(&report);

        if !report.all_valid() {
            tracing::info!(attempt, "submit attempt rejected by validation");
            self.state.status_message = Some("Please fix the highlighted fields".to_string());
            self.state.submit_phase = SubmitPhase::Idle;
            return;
        }

        self.state.submit_phase = SubmitPhase::Submitting;
        self.state.status_message = Some("Submitting...".to_string());

        let profile = ProfileDetails {
            first_name: self.state.form.first_name.as_text().to_string(),
            last_name: self.state.form.last_name.as_text().to_string(),
            phone: self.state.form.phone_number.as_text().to_string(),
            corporation_number: corp_value,
        };
        let result = self.api.submit_profile(&profile).await;

        if self.state.submit_attempt != attempt {
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(attempt, "profile submitted");
                self.state.notification =
                    Some(Notification::Success("Profile submitted successfully.".to_string()));
                // Session is done; start the next one empty
                self.state.form.clear();
                self.state.status_message = None;
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "profile submission failed");
                self.state.notification = Some(Notification::Failure(format!(
                    "Profile submission failed: {err}"
                )));
                self.state.status_message = None;
            }
        }
        self.state.submit_phase = SubmitPhase::Idle;
    }
}
