//! Number transforms
//!
//! Locale-aware formatting of plain numbers, money and percentages, compact
//! notation, byte sizes, ordinals and a few arithmetic helpers.
//!
//! # Example
//!
//! ```
//! use numkit::{format_bytes, format_compact, format_currency, to_ordinal};
//!
//! assert_eq!(format_currency(1234.56, "USD"), "$1,234.56");
//! assert_eq!(format_compact(1500.0), "1.5K");
//! assert_eq!(format_bytes(1500.0, 2), "1.46 KB");
//! assert_eq!(to_ordinal(22), "22nd");
//! ```

#![warn(clippy::all)]

mod bytes;
mod error;
mod format;
pub mod locale;
mod math;

pub use bytes::{FILE_SIZE_DECIMALS, format_bytes, format_file_size};
pub use error::{Error, Result};
pub use format::{
    DEFAULT_MAX_FRACTION, DEFAULT_MIN_FRACTION, DEFAULT_PERCENT_DECIMALS, MAX_FRACTION_DIGITS,
    NumberFormatter, format_compact, format_currency, format_currency_in, format_number,
    format_number_in, format_number_with, format_percentage, format_percentage_in, to_fixed,
};
pub use locale::{CurrencyPosition, Locale};
pub use math::{
    average, clamp, is_even, is_odd, is_valid_number, parse_number, random_between,
    random_between_with, round_to, sum, to_ordinal,
};
