//! Field validator rules against the real clock — required fields, email
//! and phone shapes, and the date-not-in-past check.

use chrono::{Duration, Local};

use simphiwe::forms::FieldType;
use simphiwe::forms::validate::validate;

#[test]
fn test_required_empty_name_invalid() {
    let err = validate(FieldType::Text, "", true);
    assert_eq!(err.as_deref(), Some("This field is required"));

    let err = validate(FieldType::Text, "   ", true);
    assert_eq!(err.as_deref(), Some("This field is required"));
}

#[test]
fn test_required_non_empty_name_valid() {
    assert!(validate(FieldType::Text, "Thabo", true).is_none());
}

#[test]
fn test_email_shapes() {
    assert!(validate(FieldType::Email, "a@b.com", true).is_none());

    let err = validate(FieldType::Email, "a@b", true);
    assert_eq!(err.as_deref(), Some("Please enter a valid email address"));

    let err = validate(FieldType::Email, "notanemail", true);
    assert_eq!(err.as_deref(), Some("Please enter a valid email address"));
}

#[test]
fn test_phone_shapes() {
    assert!(validate(FieldType::Phone, "+268 7665 5974", false).is_none());

    let err = validate(FieldType::Phone, "123", false);
    assert_eq!(err.as_deref(), Some("Please enter a valid phone number"));
}

#[test]
fn test_date_yesterday_invalid_today_valid() {
    let today = Local::now().date_naive();
    let yesterday = (today - Duration::days(1)).format("%Y-%m-%d").to_string();
    let tomorrow = (today + Duration::days(1)).format("%Y-%m-%d").to_string();

    let err = validate(FieldType::Date, &yesterday, true);
    assert_eq!(err.as_deref(), Some("Date cannot be in the past"));

    let today = today.format("%Y-%m-%d").to_string();
    assert!(validate(FieldType::Date, &today, true).is_none());
    assert!(validate(FieldType::Date, &tomorrow, true).is_none());
}
