//! Embedded locale data for number formatting.
//!
//! Only the pieces the formatters need are carried: separators, where the
//! currency symbol goes, the percent sign and the locale's own currency.

use constkit::Currency;

const NBSP: &str = "\u{00a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Where a currency symbol is placed relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPosition {
    /// `$1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// Number formatting conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, e.g. `en-US`.
    pub tag: &'static str,
    /// Thousands separator.
    pub group: &'static str,
    /// Decimal separator.
    pub decimal: &'static str,
    /// Currency symbol placement.
    pub currency_position: CurrencyPosition,
    /// Percent sign including any leading space.
    pub percent: &'static str,
    /// The locale's own currency and the symbol it uses for it.
    pub home_currency: Option<(Currency, &'static str)>,
}

/// United States English (default).
pub const EN_US: Locale = Locale {
    tag: "en-US",
    group: ",",
    decimal: ".",
    currency_position: CurrencyPosition::Prefix,
    percent: "%",
    home_currency: Some((Currency::Usd, "$")),
};

/// British English.
pub const EN_GB: Locale = Locale {
    tag: "en-GB",
    group: ",",
    decimal: ".",
    currency_position: CurrencyPosition::Prefix,
    percent: "%",
    home_currency: Some((Currency::Gbp, "£")),
};

/// Canadian English.
pub const EN_CA: Locale = Locale {
    tag: "en-CA",
    group: ",",
    decimal: ".",
    currency_position: CurrencyPosition::Prefix,
    percent: "%",
    home_currency: Some((Currency::Cad, "$")),
};

/// Australian English.
pub const EN_AU: Locale = Locale {
    tag: "en-AU",
    group: ",",
    decimal: ".",
    currency_position: CurrencyPosition::Prefix,
    percent: "%",
    home_currency: Some((Currency::Aud, "$")),
};

/// German (Germany).
pub const DE_DE: Locale = Locale {
    tag: "de-DE",
    group: ".",
    decimal: ",",
    currency_position: CurrencyPosition::Suffix,
    percent: "\u{00a0}%",
    home_currency: Some((Currency::Eur, "€")),
};

/// French (France).
pub const FR_FR: Locale = Locale {
    tag: "fr-FR",
    group: NARROW_NBSP,
    decimal: ",",
    currency_position: CurrencyPosition::Suffix,
    percent: "\u{202f}%",
    home_currency: Some((Currency::Eur, "€")),
};

/// Japanese (Japan).
pub const JA_JP: Locale = Locale {
    tag: "ja-JP",
    group: ",",
    decimal: ".",
    currency_position: CurrencyPosition::Prefix,
    percent: "%",
    home_currency: Some((Currency::Jpy, "￥")),
};

/// Vietnamese (Vietnam).
pub const VI_VN: Locale = Locale {
    tag: "vi-VN",
    group: ".",
    decimal: ",",
    currency_position: CurrencyPosition::Suffix,
    percent: "%",
    home_currency: Some((Currency::Vnd, "₫")),
};

/// Every embedded locale. The first entry is the fallback.
pub const ALL: [Locale; 8] = [EN_US, EN_GB, EN_CA, EN_AU, DE_DE, FR_FR, JA_JP, VI_VN];

impl Locale {
    /// Find a locale by tag.
    ///
    /// Matching ignores case and accepts `_` for `-`. A bare language
    /// (`"de"`) picks the first locale of that language.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let wanted = tag.trim().replace('_', "-");
        ALL.iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&wanted))
            .or_else(|| {
                ALL.iter().find(|l| {
                    l.tag
                        .split('-')
                        .next()
                        .is_some_and(|lang| lang.eq_ignore_ascii_case(&wanted))
                })
            })
            .copied()
    }

    /// [`Locale::from_tag`], falling back to `en-US`.
    pub fn resolve(tag: &str) -> Locale {
        Self::from_tag(tag).unwrap_or(EN_US)
    }

    /// Separator between an alphabetic prefix symbol and the amount, or
    /// between the amount and a suffix symbol.
    pub(crate) fn symbol_spacing(&self, symbol: &str) -> &'static str {
        match self.currency_position {
            CurrencyPosition::Suffix => NBSP,
            CurrencyPosition::Prefix
                if symbol.chars().last().is_some_and(|c| c.is_ascii_alphabetic()) =>
            {
                NBSP
            }
            CurrencyPosition::Prefix => "",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Symbol and fraction digits for a known currency, as displayed outside
/// its home locale.
pub(crate) fn currency_info(currency: Currency) -> (&'static str, usize) {
    match currency {
        Currency::Usd => ("$", 2),
        Currency::Eur => ("€", 2),
        Currency::Gbp => ("£", 2),
        Currency::Jpy => ("¥", 0),
        Currency::Cad => ("CA$", 2),
        Currency::Aud => ("A$", 2),
        Currency::Chf => ("CHF", 2),
        Currency::Cny => ("CN¥", 2),
        Currency::Vnd => ("₫", 0),
    }
}
