//! Field-level validation for account and listing data.
//!
//! The database stores every text field as TEXT; the length limits and
//! format rules that belong to the application layer live here, as
//! `validate_*` functions returning [`CoreError::Validation`] with a
//! human-readable reason.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for a renter's username.
pub const MAX_USERNAME_LENGTH: usize = 255;

/// Maximum length for an administrator's username.
pub const MAX_ADMIN_USERNAME_LENGTH: usize = 50;

/// Maximum length for personal and display names (first/last names,
/// owner names, car model names, locations).
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for a phone number.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Monetary columns are NUMERIC(10, 2): ten digits total, two of them cents.
pub const MONEY_MAX_DIGITS: u32 = 10;

/// Number of fractional digits in monetary columns.
pub const MONEY_SCALE: u32 = 2;

/// Regex pattern for phone numbers: optional leading `+`, then digits with
/// common separators.
pub const PHONE_PATTERN: &str = r"^\+?[0-9 ().-]+$";

/// Compiled phone regex. Compiled once, reused forever.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an email address: non-empty, within length limit, well-formed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.is_empty() {
        return Err(CoreError::Validation(
            "Email must not be empty".to_string(),
        ));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}

/// Validate a phone number: non-empty, within length limit, digits with
/// common separators only.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if phone.is_empty() {
        return Err(CoreError::Validation(
            "Phone number must not be empty".to_string(),
        ));
    }
    if phone.len() > MAX_PHONE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Phone number exceeds maximum length of {MAX_PHONE_LENGTH} characters"
        )));
    }
    if !PHONE_RE.is_match(phone) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'. Digits with optional +, spaces, dots, \
             dashes or parentheses only"
        )));
    }
    Ok(())
}

/// Validate a username against the given length limit
/// ([`MAX_USERNAME_LENGTH`] for renters, [`MAX_ADMIN_USERNAME_LENGTH`] for
/// administrators).
pub fn validate_username(username: &str, max_length: usize) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation(
            "Username must not be empty".to_string(),
        ));
    }
    if username.len() > max_length {
        return Err(CoreError::Validation(format!(
            "Username exceeds maximum length of {max_length} characters"
        )));
    }
    Ok(())
}

/// Validate a personal or display name: non-empty, within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a review rating. Ratings are non-negative with no upper bound.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if rating < 0 {
        return Err(CoreError::Validation(format!(
            "Rating must be non-negative, got {rating}"
        )));
    }
    Ok(())
}

/// Validate a car's model year. Years are non-negative integers.
pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if year < 0 {
        return Err(CoreError::Validation(format!(
            "Year must be non-negative, got {year}"
        )));
    }
    Ok(())
}

/// Validate a monetary amount against the NUMERIC(10, 2) column shape:
/// at most [`MONEY_SCALE`] fractional digits and at most
/// [`MONEY_MAX_DIGITS`] digits in total.
pub fn validate_money(amount: Decimal) -> Result<(), CoreError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::Validation(format!(
            "Amount {amount} has more than {MONEY_SCALE} decimal places"
        )));
    }
    // Ten digits total with two reserved for cents leaves eight integer digits.
    let limit = Decimal::from(10i64.pow(MONEY_MAX_DIGITS - MONEY_SCALE));
    if amount.abs() >= limit {
        return Err(CoreError::Validation(format!(
            "Amount {amount} exceeds {MONEY_MAX_DIGITS} total digits \
             ({MONEY_SCALE} of them fractional)"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
