//! Onboarding form state and navigation

use super::field::{FieldId, FormField};
use super::validation::ValidationReport;

/// Index of the submit button in the focus order, after the four fields
pub const SUBMIT_INDEX: usize = 4;

/// The onboarding form: four fields plus the submit button row.
///
/// Owns all per-field values and per-field validity. Created empty when the
/// form mounts and discarded at the end of the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub phone_number: FormField,
    pub corporation_number: FormField,
    pub active_field_index: usize,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            phone_number: FormField::text("phone_number", "Phone Number"),
            corporation_number: FormField::text("corporation_number", "Corporation Number"),
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::CorporationNumber => &self.corporation_number,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::CorporationNumber => &mut self.corporation_number,
        }
    }

    /// Field id at a focus index; `None` for the submit button row
    pub fn field_at(&self, index: usize) -> Option<FieldId> {
        FieldId::ALL.get(index).copied()
    }

    /// Currently focused field; `None` when focus is on the submit button
    pub fn active_field(&self) -> Option<FieldId> {
        self.field_at(self.active_field_index)
    }

    /// True when focus is on the submit button row
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// Move focus to the next field (wraps around, includes the submit row)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (SUBMIT_INDEX + 1);
    }

    /// Move focus to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = SUBMIT_INDEX;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Apply the outcome of one recompute-all validation pass.
    ///
    /// All four validity flags change together so a single re-render shows
    /// the full result of the attempt.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        self.first_name.set_validity(report.first_name);
        self.last_name.set_validity(report.last_name);
        self.phone_number.set_validity(report.phone_number);
        self.corporation_number.set_validity(report.corporation_number);
    }

    /// True if any field currently shows an inline error
    pub fn has_errors(&self) -> bool {
        FieldId::ALL.iter().any(|id| self.field(*id).has_error())
    }

    /// Clear all values and validity back to the untouched state
    pub fn clear(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_form_is_empty() {
        let form = OnboardingForm::new();
        assert_eq!(form.active_field_index, 0);
        for id in FieldId::ALL {
            assert!(form.field(id).value.is_none());
            assert!(form.field(id).invalid.is_none());
        }
        assert!(!form.has_errors());
    }

    #[test]
    fn test_field_labels() {
        let form = OnboardingForm::new();
        assert_eq!(form.field(FieldId::FirstName).label, "First Name");
        assert_eq!(form.field(FieldId::LastName).label, "Last Name");
        assert_eq!(form.field(FieldId::PhoneNumber).label, "Phone Number");
        assert_eq!(
            form.field(FieldId::CorporationNumber).label,
            "Corporation Number"
        );
    }

    #[test]
    fn test_next_field_wraps_through_submit_row() {
        let mut form = OnboardingForm::new();
        for expected in [1, 2, 3, SUBMIT_INDEX, 0] {
            form.next_field();
            assert_eq!(form.active_field_index, expected);
        }
    }

    #[test]
    fn test_prev_field_wraps_to_submit_row() {
        let mut form = OnboardingForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, SUBMIT_INDEX);
        assert!(form.is_submit_active());
        assert!(form.active_field().is_none());
    }

    #[test]
    fn test_field_at_maps_indices() {
        let form = OnboardingForm::new();
        assert_eq!(form.field_at(0), Some(FieldId::FirstName));
        assert_eq!(form.field_at(1), Some(FieldId::LastName));
        assert_eq!(form.field_at(2), Some(FieldId::PhoneNumber));
        assert_eq!(form.field_at(3), Some(FieldId::CorporationNumber));
        assert_eq!(form.field_at(SUBMIT_INDEX), None);
    }

    #[test]
    fn test_apply_report_sets_all_flags_together() {
        let mut form = OnboardingForm::new();
        form.apply_report(&ValidationReport {
            first_name: true,
            last_name: false,
            phone_number: true,
            corporation_number: false,
        });
        assert!(!form.first_name.has_error());
        assert!(form.last_name.has_error());
        assert!(!form.phone_number.has_error());
        assert!(form.corporation_number.has_error());
        assert!(form.has_errors());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = OnboardingForm::new();
        form.first_name.set_text("Jane".to_string());
        form.corporation_number.set_validity(false);
        form.active_field_index = 3;
        form.clear();
        assert_eq!(form.active_field_index, 0);
        assert!(form.first_name.value.is_none());
        assert!(form.corporation_number.invalid.is_none());
    }
}
