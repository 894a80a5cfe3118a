//! # validkit
//!
//! Stateless predicates over text and numbers. Every validator returns
//! `bool` and never panics; empty input is invalid unless stated otherwise.
//!
//! - **format**: email, URL, phone, card number, IPv4, hex color, UUID, JSON, slug
//! - **generic**: emptiness, password strength, character classes, lengths, ranges
//! - **postal**: postal codes by region
//!
//! ## Example
//!
//! ```
//! use validkit::{PostalRegion, is_valid_credit_card, is_valid_postal_code_for};
//!
//! assert!(is_valid_credit_card("4532-0151-1283-0366"));
//! assert!(is_valid_postal_code_for("K1A 0A6", "ca"));
//! assert_eq!(PostalRegion::from_code("uk"), Some(PostalRegion::Uk));
//! ```

#![warn(clippy::all)]

mod format;
mod generic;
mod postal;

pub use format::{
    is_valid_credit_card, is_valid_email, is_valid_hex_color, is_valid_ipv4, is_valid_json,
    is_valid_phone_number, is_valid_slug, is_valid_url, is_valid_uuid, luhn_checksum_ok,
};
pub use generic::{
    MIN_PASSWORD_LENGTH, has_max_length, has_min_length, is_alpha, is_alphanumeric, is_empty,
    is_in_range, is_numeric, is_strong_password,
};
pub use postal::{PostalRegion, is_valid_postal_code, is_valid_postal_code_for};
