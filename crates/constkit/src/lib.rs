//! # constkit
//!
//! Static lookup tables shared by the helpers crates and by external callers.
//!
//! The tables carry no behavior beyond lookups. Values are versioned with the
//! crate: changing one is a breaking change for every consumer.
//!
//! - **http**: HTTP status codes
//! - **patterns**: regex sources for common formats
//! - **units**: file size and time multipliers
//! - **display**: date formats, breakpoints, colors, UI defaults
//! - **app**: API defaults, storage keys, environments
//! - **codes**: ISO-4217 currency and ISO-3166 country codes
//!
//! ## Example
//!
//! ```
//! use constkit::{Currency, HttpStatus, units};
//!
//! assert_eq!(HttpStatus::NotFound.code(), 404);
//! assert_eq!(HttpStatus::from_code(422), Some(HttpStatus::UnprocessableEntity));
//! assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
//! assert_eq!(units::MAX_UPLOAD_SIZE, 10 * units::MB);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod codes;
pub mod display;
pub mod http;
pub mod patterns;
pub mod units;

pub use app::Environment;
pub use codes::{Country, Currency};
pub use http::HttpStatus;
