//! Postal codes by region.

use regex::Regex;
use std::sync::LazyLock;

/// Regions with a known postal code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostalRegion {
    /// `12345` or `12345-6789`
    Us,
    /// `K1A 0A6`
    Ca,
    /// `SW1A 1AA`
    Uk,
    /// `10115`
    De,
    /// `75001`
    Fr,
}

impl PostalRegion {
    /// Every region, in table order.
    pub const ALL: [PostalRegion; 5] = [
        PostalRegion::Us,
        PostalRegion::Ca,
        PostalRegion::Uk,
        PostalRegion::De,
        PostalRegion::Fr,
    ];

    /// Table key.
    pub fn code(&self) -> &'static str {
        match self {
            PostalRegion::Us => "US",
            PostalRegion::Ca => "CA",
            PostalRegion::Uk => "UK",
            PostalRegion::De => "DE",
            PostalRegion::Fr => "FR",
        }
    }

    /// Regex source for the region's format.
    pub fn pattern(&self) -> &'static str {
        match self {
            PostalRegion::Us => r"^[0-9]{5}(-[0-9]{4})?$",
            PostalRegion::Ca => r"^[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9]$",
            PostalRegion::Uk => r"^[A-Za-z]{1,2}[0-9][A-Za-z0-9]? [0-9][A-Za-z]{2}$",
            PostalRegion::De | PostalRegion::Fr => r"^[0-9]{5}$",
        }
    }

    /// Look up a region by key, ignoring case. Only the table keys match,
    /// so `GB` is not an alias for `UK`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Whether `postal_code` has this region's format.
    pub fn is_match(&self, postal_code: &str) -> bool {
        static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
            PostalRegion::ALL
                .iter()
                .map(|r| Regex::new(r.pattern()).expect("valid postal code regex"))
                .collect()
        });
        COMPILED[*self as usize].is_match(postal_code)
    }
}

impl std::fmt::Display for PostalRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// US postal code.
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    PostalRegion::Us.is_match(postal_code)
}

/// Postal code for `country` (`US`, `CA`, `UK`, `DE`, `FR`; any case).
/// Unknown regions are never valid.
pub fn is_valid_postal_code_for(postal_code: &str, country: &str) -> bool {
    PostalRegion::from_code(country).is_some_and(|region| region.is_match(postal_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_postal_codes() {
        assert!(is_valid_postal_code_for("12345", "US"));
        assert!(is_valid_postal_code_for("12345-6789", "US"));
        assert!(!is_valid_postal_code_for("1234", "US"));
        assert!(!is_valid_postal_code_for("12345-678", "US"));
    }

    #[test]
    fn test_canadian_postal_codes() {
        assert!(is_valid_postal_code_for("K1A 0A6", "CA"));
        assert!(is_valid_postal_code_for("M5V 3L9", "CA"));
        assert!(!is_valid_postal_code_for("12345", "CA"));
        assert!(!is_valid_postal_code_for("K1A0A6", "CA"));
    }

    #[test]
    fn test_uk_postal_codes() {
        assert!(is_valid_postal_code_for("SW1A 1AA", "UK"));
        assert!(is_valid_postal_code_for("M1 1AE", "uk"));
        assert!(is_valid_postal_code_for("B33 8TH", "UK"));
        assert!(!is_valid_postal_code_for("SW1A1AA", "UK"));
        assert!(!is_valid_postal_code_for("SW1A 1AA", "GB"));
    }

    #[test]
    fn test_de_and_fr_postal_codes() {
        assert!(is_valid_postal_code_for("10115", "DE"));
        assert!(is_valid_postal_code_for("75001", "fr"));
        assert!(!is_valid_postal_code_for("7500", "FR"));
    }

    #[test]
    fn test_defaults_to_us() {
        assert!(is_valid_postal_code("12345"));
        assert!(!is_valid_postal_code("K1A 0A6"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn test_unknown_region() {
        assert!(!is_valid_postal_code_for("12345", "XX"));
        assert!(!is_valid_postal_code_for("12345", ""));
        assert_eq!(PostalRegion::from_code("xx"), None);
    }

    #[test]
    fn test_region_table() {
        for region in PostalRegion::ALL {
            assert_eq!(PostalRegion::from_code(region.code()), Some(region));
            assert!(region.pattern().starts_with('^') && region.pattern().ends_with('$'));
        }
        assert_eq!(PostalRegion::Uk.to_string(), "UK");
    }
}
