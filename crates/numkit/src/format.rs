//! Locale-aware number formatting.
//!
//! [`NumberFormatter`] is the builder behind the free functions. Every
//! formatter returns an empty string for `None`, NaN and infinities so
//! callers can render the result directly.
//!
//! Locale formatters round the shortest decimal that reads back as the
//! same `f64`, so `1.005` shows as `1.01`. [`to_fixed`] rounds the exact
//! binary value instead, so `1.005` gives `1.00`.

use crate::error::{Error, Result};
use crate::locale::{CurrencyPosition, Locale, currency_info};
use constkit::Currency;

/// Default fraction digits for [`format_number`].
pub const DEFAULT_MIN_FRACTION: usize = 0;
/// Default fraction digits for [`format_number`].
pub const DEFAULT_MAX_FRACTION: usize = 2;
/// Default decimals for [`format_percentage`].
pub const DEFAULT_PERCENT_DECIMALS: usize = 2;
/// Most fraction digits any formatter renders. Asking for more gives `""`.
pub const MAX_FRACTION_DIGITS: usize = 100;

const COMPACT_TIERS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Below this magnitude compact output switches to exponent form.
const COMPACT_EXPONENT_BELOW: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
enum Style {
    Decimal,
    Percent,
    Currency { symbol: String },
}

/// Builder for locale-aware number output.
///
/// ```
/// use numkit::{Locale, NumberFormatter};
///
/// let f = NumberFormatter::currency(Locale::resolve("de-DE"), "EUR").unwrap();
/// assert_eq!(f.format(1234.5), "1.234,50\u{a0}€");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    locale: Locale,
    style: Style,
    min_fraction: usize,
    max_fraction: usize,
}

impl NumberFormatter {
    /// Plain decimal output with 0 to 2 fraction digits.
    pub fn decimal(locale: Locale) -> Self {
        Self {
            locale,
            style: Style::Decimal,
            min_fraction: DEFAULT_MIN_FRACTION,
            max_fraction: DEFAULT_MAX_FRACTION,
        }
    }

    /// Ratio shown as a percentage (`0.5` → `50%`), no fraction digits.
    pub fn percent(locale: Locale) -> Self {
        Self {
            locale,
            style: Style::Percent,
            min_fraction: 0,
            max_fraction: 0,
        }
    }

    /// Money in the given ISO 4217 currency.
    ///
    /// Known currencies use their symbol and minor-unit digits. Any other
    /// three-letter code is shown as the code itself with two digits.
    pub fn currency(locale: Locale, code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidCurrency(code.to_string()));
        }

        let (symbol, digits) = match Currency::from_code(code) {
            Some(currency) => {
                let (symbol, digits) = match locale.home_currency {
                    Some((home, local)) if home == currency => (local, currency_info(currency).1),
                    _ => currency_info(currency),
                };
                (symbol.to_string(), digits)
            }
            None => (code.to_ascii_uppercase(), 2),
        };

        Ok(Self {
            locale,
            style: Style::Currency { symbol },
            min_fraction: digits,
            max_fraction: digits,
        })
    }

    /// Minimum fraction digits. Raises the maximum if needed.
    pub fn min_fraction(mut self, digits: usize) -> Self {
        self.min_fraction = digits;
        self.max_fraction = self.max_fraction.max(digits);
        self
    }

    /// Maximum fraction digits. Lowers the minimum if needed.
    pub fn max_fraction(mut self, digits: usize) -> Self {
        self.max_fraction = digits;
        self.min_fraction = self.min_fraction.min(digits);
        self
    }

    /// Exact number of fraction digits.
    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction = digits;
        self.max_fraction = digits;
        self
    }

    /// Locale this formatter renders for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render `value`, or `""` when it is missing or not finite, or when
    /// more than [`MAX_FRACTION_DIGITS`] digits were requested.
    pub fn format(&self, value: impl Into<Option<f64>>) -> String {
        let Some(value) = finite(value) else {
            return String::new();
        };
        if self.max_fraction > MAX_FRACTION_DIGITS {
            return String::new();
        }

        let shortest = value.abs().to_string();
        let decimal = match self.style {
            Style::Percent => shift_point(&shortest, 2),
            _ => shortest,
        };
        let (magnitude, nonzero) = self.magnitude(&decimal);
        let sign = if value < 0.0 && nonzero { "-" } else { "" };

        match &self.style {
            Style::Decimal => format!("{sign}{magnitude}"),
            Style::Percent => format!("{sign}{magnitude}{}", self.locale.percent),
            Style::Currency { symbol } => {
                let space = self.locale.symbol_spacing(symbol);
                match self.locale.currency_position {
                    CurrencyPosition::Prefix => format!("{sign}{symbol}{space}{magnitude}"),
                    CurrencyPosition::Suffix => format!("{sign}{magnitude}{space}{symbol}"),
                }
            }
        }
    }

    /// Grouped digits of a non-negative decimal and whether any digit is
    /// nonzero after rounding.
    fn magnitude(&self, decimal: &str) -> (String, bool) {
        let fixed = round_half_up(decimal, self.max_fraction);
        let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));

        let mut frac = frac_part.to_string();
        while frac.len() > self.min_fraction && frac.ends_with('0') {
            frac.pop();
        }

        let grouped = group_digits(int_part, self.locale.group);
        let out = if frac.is_empty() {
            grouped
        } else {
            format!("{grouped}{}{frac}", self.locale.decimal)
        };
        (out, nonzero)
    }
}

fn finite(value: impl Into<Option<f64>>) -> Option<f64> {
    value.into().filter(|v| v.is_finite())
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Round plain decimal text (`"1234.5678"`, no sign) to exactly `digits`
/// fraction digits, halves going up.
fn round_half_up(decimal: &str, digits: usize) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&d| d >= b'5');

    let mut out: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    out.resize(int_part.len() + digits, b'0');

    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for d in out.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            out.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut text: String = out.into_iter().map(char::from).collect();
    if digits > 0 {
        text.insert(int_len, '.');
    }
    text
}

/// Move the decimal point of plain decimal text `places` to the right.
fn shift_point(decimal: &str, places: usize) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    let point = int_part.len() + places;
    let mut digits = format!("{int_part}{frac_part}");
    while digits.len() < point {
        digits.push('0');
    }

    let (int_part, frac_part) = digits.split_at(point);
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Every decimal digit of the binary value of `value`, unrounded.
fn exact_decimal(value: f64) -> String {
    let biased = ((value.to_bits() >> 52) & 0x7ff) as i32;
    let exponent = if biased == 0 { -1074 } else { biased - 1075 };
    let precision = usize::try_from(-exponent).unwrap_or(0);
    format!("{value:.precision$}")
}

/// Fixed-point text rounded on the exact binary value, halves going away
/// from zero.
///
/// Returns `""` for NaN, infinities and more than [`MAX_FRACTION_DIGITS`]
/// digits.
///
/// ```
/// assert_eq!(numkit::to_fixed(2.5, 0), "3");
/// assert_eq!(numkit::to_fixed(1.005, 2), "1.00");
/// assert_eq!(numkit::to_fixed(-1.25, 1), "-1.3");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || digits > MAX_FRACTION_DIGITS {
        return String::new();
    }
    let body = round_half_up(&exact_decimal(value.abs()), digits);
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Decimal output with explicit fraction bounds for `locale`.
///
/// If `min_fraction` exceeds `max_fraction`, the maximum is raised to match.
pub fn format_number_in(
    value: impl Into<Option<f64>>,
    locale: Locale,
    min_fraction: usize,
    max_fraction: usize,
) -> String {
    NumberFormatter::decimal(locale)
        .max_fraction(max_fraction.max(min_fraction))
        .min_fraction(min_fraction)
        .format(value)
}

/// [`format_number_in`] with the default locale.
pub fn format_number_with(
    value: impl Into<Option<f64>>,
    min_fraction: usize,
    max_fraction: usize,
) -> String {
    format_number_in(value, Locale::default(), min_fraction, max_fraction)
}

/// `1234.56` → `1,234.56` with the default locale.
pub fn format_number(value: impl Into<Option<f64>>) -> String {
    format_number_with(value, DEFAULT_MIN_FRACTION, DEFAULT_MAX_FRACTION)
}

/// Money in `code` for `locale`; `""` when the code is not three letters.
pub fn format_currency_in(value: impl Into<Option<f64>>, code: &str, locale: Locale) -> String {
    NumberFormatter::currency(locale, code)
        .map(|f| f.format(value))
        .unwrap_or_default()
}

/// Money in `code` with the default locale.
pub fn format_currency(value: impl Into<Option<f64>>, code: &str) -> String {
    format_currency_in(value, code, Locale::default())
}

/// Abbreviate with K, M, B or T and one decimal place (`1500` → `1.5K`).
///
/// Magnitudes below 1000 print as the shortest round-trip text, in
/// exponent form below one millionth (`1e-7`).
pub fn format_compact(value: impl Into<Option<f64>>) -> String {
    let Some(value) = finite(value) else {
        return String::new();
    };
    for (threshold, suffix) in COMPACT_TIERS {
        if value.abs() >= threshold {
            let fixed = to_fixed(value / threshold, 1);
            let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
            return format!("{trimmed}{suffix}");
        }
    }
    if value != 0.0 && value.abs() < COMPACT_EXPONENT_BELOW {
        return format!("{value:e}");
    }
    // Drop the sign of negative zero.
    (value + 0.0).to_string()
}

/// Ratio as a percentage with exactly `decimals` digits for `locale`.
pub fn format_percentage_in(
    value: impl Into<Option<f64>>,
    decimals: usize,
    locale: Locale,
) -> String {
    NumberFormatter::percent(locale)
        .fraction_digits(decimals)
        .format(value)
}

/// `0.1234` → `12.34%` with the default locale.
pub fn format_percentage(value: impl Into<Option<f64>>, decimals: usize) -> String {
    format_percentage_in(value, decimals, Locale::default())
}
