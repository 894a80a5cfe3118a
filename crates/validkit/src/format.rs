//! Format validators.

use constkit::patterns;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::EMAIL).expect("valid email regex"));

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::HEX_COLOR).expect("valid hex color regex"));

static UUID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::UUID).expect("valid uuid regex"));

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::SLUG).expect("valid slug regex"));

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;
const CARD_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;

/// One `@`, no whitespace, and a dot somewhere after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Absolute URL with a scheme (`https://…`, `ftp://…`, `mailto:…`).
pub fn is_valid_url(text: &str) -> bool {
    url::Url::parse(text).is_ok()
}

fn ascii_digits(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// 10 to 15 digits once punctuation and spaces are ignored.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_DIGITS.contains(&ascii_digits(phone).len())
}

/// Luhn check over decimal digit values, rightmost digit last.
pub fn luhn_checksum_ok(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Card number with 13 to 19 digits (separators ignored) passing Luhn.
pub fn is_valid_credit_card(number: &str) -> bool {
    let digits = ascii_digits(number);
    CARD_DIGITS.contains(&digits.len()) && luhn_checksum_ok(&digits)
}

/// Dotted quad where every part is a canonical decimal in `0..=255`.
///
/// `01`, `+1` and ` 1` are rejected: the part must read back unchanged.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|part| part.parse::<u8>().is_ok_and(|n| n.to_string() == *part))
}

/// `#` followed by 3 or 6 hex digits.
pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// RFC 4122 UUID (versions 1 to 5), any case.
pub fn is_valid_uuid(text: &str) -> bool {
    UUID.is_match(text)
}

/// Any JSON value, including bare strings and numbers.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

/// Lowercase alphanumeric segments joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}
