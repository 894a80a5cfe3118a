//! Regular expression sources for common formats.
//!
//! Sources are written for the `regex` crate. Digit classes are spelled
//! `[0-9]` because `\d` is Unicode-aware there.

/// Permissive email: one `@`, no whitespace, a dot in the domain.
pub const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Loose phone number: optional `+`, then digits, spaces, dashes, parentheses.
pub const PHONE: &str = r"^\+?[0-9\s()-]+$";

/// http(s) URL.
pub const URL: &str = r"^https?://[^\s/$.?#].[^\s]*$";

/// `#` followed by 3 or 6 hex digits.
pub const HEX_COLOR: &str = r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$";

/// RFC 4122 UUID, versions 1-5, case-insensitive.
pub const UUID: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

/// Sixteen digits in groups of four, optionally space separated.
pub const CREDIT_CARD: &str = r"^[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}$";

/// Dotted-quad IPv4 address.
pub const IP_ADDRESS: &str = r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

/// ASCII letters only.
pub const ALPHA_ONLY: &str = r"^[a-zA-Z]+$";

/// ASCII letters and digits only.
pub const ALPHANUMERIC: &str = r"^[a-zA-Z0-9]+$";

/// ASCII digits only.
pub const NUMERIC_ONLY: &str = r"^[0-9]+$";

/// Lowercase alphanumeric segments joined by single hyphens.
pub const SLUG: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// Every pattern with its table key.
pub const ALL: [(&str, &str); 11] = [
    ("EMAIL", EMAIL),
    ("PHONE", PHONE),
    ("URL", URL),
    ("HEX_COLOR", HEX_COLOR),
    ("UUID", UUID),
    ("CREDIT_CARD", CREDIT_CARD),
    ("IP_ADDRESS", IP_ADDRESS),
    ("ALPHA_ONLY", ALPHA_ONLY),
    ("ALPHANUMERIC", ALPHANUMERIC),
    ("NUMERIC_ONLY", NUMERIC_ONLY),
    ("SLUG", SLUG),
];
