//! Generic predicates: emptiness, strength, character classes, bounds.
//!
//! Lengths count characters, not bytes.

use constkit::patterns;
use regex::Regex;
use std::sync::LazyLock;

static ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::ALPHA_ONLY).expect("valid alpha regex"));

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::ALPHANUMERIC).expect("valid alphanumeric regex"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::NUMERIC_ONLY).expect("valid numeric regex"));

/// Shortest password [`is_strong_password`] accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Missing, empty or whitespace only.
pub fn is_empty<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_none_or(|v| v.trim().is_empty())
}

/// At least [`MIN_PASSWORD_LENGTH`] characters with an ASCII uppercase
/// letter, an ASCII lowercase letter and an ASCII digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn is_alpha(value: &str) -> bool {
    ALPHA.is_match(value)
}

pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// Non-empty and at least `min` characters long.
pub fn has_min_length<'a>(value: impl Into<Option<&'a str>>, min: usize) -> bool {
    value
        .into()
        .is_some_and(|v| !v.is_empty() && v.chars().count() >= min)
}

/// At most `max` characters. Missing and empty values always pass.
pub fn has_max_length<'a>(value: impl Into<Option<&'a str>>, max: usize) -> bool {
    value.into().is_none_or(|v| v.chars().count() <= max)
}

/// `min <= value <= max`.
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
