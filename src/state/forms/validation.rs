//! Pure field validators and the phone number normalizer

/// Maximum accepted length for first and last name, in characters
const MAX_NAME_LEN: usize = 50;

/// Exact digit count for a corporation number
const CORPORATION_NUMBER_LEN: usize = 9;

/// Validate a first or last name: trimmed non-empty, at most 50 characters
pub fn validate_name(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && value.chars().count() <= MAX_NAME_LEN
}

/// Validate a Canadian phone number against the NANP shape.
///
/// Strips every non-digit character first, then requires exactly 11 digits
/// with a leading country code `1`. The area code and the exchange code must
/// each start with a digit in `2..=9`; the remaining digits are free.
pub fn validate_canadian_phone(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 || digits[0] != 1 {
        return false;
    }
    // digits[1..4] area code, digits[4..7] exchange, digits[7..11] subscriber
    (2..=9).contains(&digits[1]) && (2..=9).contains(&digits[4])
}

/// Local pre-check for a corporation number: exactly 9 digits, nothing else
pub fn validate_corporation_number_format(value: &str) -> bool {
    value.len() == CORPORATION_NUMBER_LEN && value.chars().all(|c| c.is_ascii_digit())
}

/// Normalize raw phone input toward the canonical `+1` dialing format.
///
/// Trims whitespace, strips an optional leading `+` and an optional leading
/// `1`, then prepends `+1`. Idempotent: an already-normalized value passes
/// through unchanged.
pub fn normalize_phone(value: &str) -> String {
    let rest = value.trim();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let rest = rest.strip_prefix('1').unwrap_or(rest);
    format!("+1{rest}")
}

/// Outcome of one recompute-all validation pass over the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub first_name: bool,
    pub last_name: bool,
    pub phone_number: bool,
    pub corporation_number: bool,
}

impl ValidationReport {
    /// True when every field passed
    pub fn all_valid(&self) -> bool {
        self.first_name && self.last_name && self.phone_number && self.corporation_number
    }
}
