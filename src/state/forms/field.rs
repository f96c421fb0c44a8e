//! Form field value objects

/// Identifies one of the four onboarding fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    PhoneNumber,
    CorporationNumber,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::PhoneNumber,
        FieldId::CorporationNumber,
    ];

    /// Inline error message shown beneath the field when invalid
    pub fn error_message(self) -> &'static str {
        match self {
            FieldId::FirstName => "Invalid First Name",
            FieldId::LastName => "Invalid Last Name",
            FieldId::PhoneNumber => "Invalid Canadian Phone Number",
            FieldId::CorporationNumber => "Invalid Corporation Number",
        }
    }
}

/// Represents a single form field with its configuration and value
///
/// `value` stays `None` until the field is first edited. `invalid` stays
/// `None` until a validation check has actually run for the field; that is
/// distinct from "valid" and means no inline error is shown either way.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: Option<String>,
    pub invalid: Option<bool>,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: None,
            invalid: None,
        }
    }

    /// Get the text value (empty string while unset)
    pub fn as_text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Replace the field value
    pub fn set_text(&mut self, value: String) {
        self.value = Some(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.get_or_insert_with(String::new).push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let Some(s) = self.value.as_mut() {
            s.pop();
        }
    }

    /// Record the outcome of a validation check for this field
    pub fn set_validity(&mut self, valid: bool) {
        self.invalid = Some(!valid);
    }

    /// True once a validation check has run and failed
    pub fn has_error(&self) -> bool {
        self.invalid == Some(true)
    }

    /// Reset value and validity to the untouched state
    pub fn reset(&mut self) {
        self.value = None;
        self.invalid = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        self.as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_field_is_unset() {
        let field = FormField::text("first_name", "First Name");
        assert!(field.value.is_none());
        assert!(field.invalid.is_none());
        assert_eq!(field.as_text(), "");
        assert!(!field.has_error());
    }

    #[test]
    fn test_push_char_sets_value() {
        let mut field = FormField::text("first_name", "First Name");
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        assert!(field.value.is_some());
    }

    #[test]
    fn test_pop_char_on_unset_is_noop() {
        let mut field = FormField::text("first_name", "First Name");
        field.pop_char();
        assert!(field.value.is_none());
    }

    #[test]
    fn test_set_validity_marks_error() {
        let mut field = FormField::text("phone_number", "Phone Number");
        field.set_validity(false);
        assert!(field.has_error());
        field.set_validity(true);
        assert!(!field.has_error());
        assert_eq!(field.invalid, Some(false));
    }

    #[test]
    fn test_reset_clears_value_and_validity() {
        let mut field = FormField::text("last_name", "Last Name");
        field.push_char('S');
        field.set_validity(false);
        field.reset();
        assert!(field.value.is_none());
        assert!(field.invalid.is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldId::FirstName.error_message(), "Invalid First Name");
        assert_eq!(FieldId::LastName.error_message(), "Invalid Last Name");
        assert_eq!(
            FieldId::PhoneNumber.error_message(),
            "Invalid Canadian Phone Number"
        );
        assert_eq!(
            FieldId::CorporationNumber.error_message(),
            "Invalid Corporation Number"
        );
    }
}
