//! Per-field validation rules
//!
//! Each rule looks at a single field in isolation; there are no cross-field
//! checks. An empty message means the value is valid.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FormField;

pub const NAME_MESSAGE: &str = "Name must contain only alphabets and spaces.";
pub const PHONE_MESSAGE: &str = "Phone number must be 10 digits.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const MARKS_MESSAGE: &str = "Marks must be between 1 and 100.";

// Constant patterns; a typo here fails the pattern test below.
#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));
#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Validate one field value, returning the error message (empty when valid).
pub fn validate_field(field: FormField, value: &str) -> String {
    let valid = match field {
        FormField::Name => NAME_PATTERN.is_match(value),
        FormField::Phone => PHONE_PATTERN.is_match(value),
        FormField::Email => EMAIL_PATTERN.is_match(value),
        FormField::Marks1 | FormField::Marks2 | FormField::Marks3 => marks_in_range(value),
    };

    if valid {
        String::new()
    } else {
        message_for(field).to_string()
    }
}

/// Error message shown when `field` fails its rule
pub fn message_for(field: FormField) -> &'static str {
    match field {
        FormField::Name => NAME_MESSAGE,
        FormField::Phone => PHONE_MESSAGE,
        FormField::Email => EMAIL_MESSAGE,
        FormField::Marks1 | FormField::Marks2 | FormField::Marks3 => MARKS_MESSAGE,
    }
}

/// Numeric and within the inclusive range 1..=100. Blank input counts as zero.
fn marks_in_range(value: &str) -> bool {
    let trimmed = value.trim();
    let number = if trimmed.is_empty() {
        0.0
    } else {
        match trimmed.parse::<f64>() {
            Ok(n) => n,
            Err(_) => return false,
        }
    };

    (1.0..=100.0).contains(&number)
}
