use chrono::{Local, NaiveDate};

/// Input kinds with type-specific validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Date,
}

/// Phone policy: optional leading '+', then 7–15 digits once interior
/// spaces are stripped.
const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// Validate a single field value. Returns `None` when valid, or the message
/// to show under the field. Rules apply in order, first failure wins:
/// required, then the type-specific shape check (only on non-empty values).
pub fn validate(field_type: FieldType, value: &str, required: bool) -> Option<String> {
    validate_on(field_type, value, required, Local::now().date_naive())
}

/// Same as [`validate`] with an explicit "today" for the date rule.
pub fn validate_on(
    field_type: FieldType,
    value: &str,
    required: bool,
    today: NaiveDate,
) -> Option<String> {
    let trimmed = value.trim();

    if required && trimmed.is_empty() {
        return Some("This field is required".to_string());
    }
    if trimmed.is_empty() {
        return None;
    }

    match field_type {
        FieldType::Text => None,
        FieldType::Email => validate_email(trimmed),
        FieldType::Phone => validate_phone(trimmed),
        FieldType::Date => validate_date(trimmed, today),
    }
}

/// RFC-light email shape: no whitespace, exactly one '@', and a '.' in the
/// domain part with characters on both sides of it.
fn validate_email(value: &str) -> Option<String> {
    let invalid = Some("Please enter a valid email address".to_string());

    if value.chars().any(char::is_whitespace) {
        return invalid;
    }
    let mut parts = value.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let domain = match (parts.next(), parts.next()) {
        (Some(domain), None) => domain,
        _ => return invalid, // zero or more than one '@'
    };
    if local.is_empty() || domain.is_empty() {
        return invalid;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return invalid;
    }
    None
}

/// International-leaning phone shape: strip spaces, allow one leading '+',
/// require 7–15 digits and nothing else.
fn validate_phone(value: &str) -> Option<String> {
    let invalid = Some("Please enter a valid phone number".to_string());

    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return invalid;
    }
    if digits.len() < PHONE_MIN_DIGITS || digits.len() > PHONE_MAX_DIGITS {
        return invalid;
    }
    None
}

/// Dates must not lie strictly before the current calendar day. An
/// unparseable value fails the same check — the field is a date input, so
/// anything else is garbage.
fn validate_date(value: &str, today: NaiveDate) -> Option<String> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) if date < today => Some("Date cannot be in the past".to_string()),
        Ok(_) => None,
        Err(_) => Some("Date cannot be in the past".to_string()),
    }
}
