//! ISO-4217 currency and ISO-3166 country codes.

use serde::Serialize;

/// Supported currencies (ISO-4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// Japanese yen
    Jpy,
    /// Canadian dollar
    Cad,
    /// Australian dollar
    Aud,
    /// Swiss franc
    Chf,
    /// Chinese yuan
    Cny,
    /// Vietnamese dong
    Vnd,
}

impl Currency {
    /// Every currency in the table.
    pub const ALL: [Currency; 9] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
        Currency::Chf,
        Currency::Cny,
        Currency::Vnd,
    ];

    /// Three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Vnd => "VND",
        }
    }

    /// Look up a currency by code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Supported countries (ISO-3166 alpha-2).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    /// United States
    US,
    /// Canada
    CA,
    /// United Kingdom
    GB,
    /// Germany
    DE,
    /// France
    FR,
    /// Japan
    JP,
    /// Australia
    AU,
    /// Vietnam
    VN,
}

impl Country {
    /// Every country in the table.
    pub const ALL: [Country; 8] = [
        Country::US,
        Country::CA,
        Country::GB,
        Country::DE,
        Country::FR,
        Country::JP,
        Country::AU,
        Country::VN,
    ];

    /// Two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::US => "US",
            Country::CA => "CA",
            Country::GB => "GB",
            Country::DE => "DE",
            Country::FR => "FR",
            Country::JP => "JP",
            Country::AU => "AU",
            Country::VN => "VN",
        }
    }

    /// Look up a country by code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("vnd"), Some(Currency::Vnd));
        assert_eq!(Currency::from_code("XYZ"), None);
        assert_eq!(Currency::Chf.to_string(), "CHF");
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(Country::from_code("gb"), Some(Country::GB));
        assert_eq!(Country::from_code("UK"), None);
        assert_eq!(Country::ALL.len(), 8);
    }

    #[test]
    fn test_serialize_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        assert_eq!(serde_json::to_string(&Country::VN).unwrap(), "\"VN\"");
    }
}
