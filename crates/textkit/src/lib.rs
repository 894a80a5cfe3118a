//! # textkit
//!
//! Pure string transforms.
//!
//! - **Transforms**: capitalize, truncate, mask, initials, reverse, word counts
//! - **Case**: camelCase, kebab-case, snake_case, PascalCase
//! - **Slugs**: URL-friendly identifiers with accent folding
//! - **HTML**: naive tag stripping and entity escaping
//! - **Envelopes**: normalizing loosely-typed error objects into one message
//!
//! Lengths are counted in `char`s (Unicode scalar values).
//!
//! ## Example
//!
//! ```
//! use textkit::{kebab_case, slugify, truncate, truncate_middle};
//!
//! assert_eq!(truncate("Hello World", 5), "Hello...");
//! assert_eq!(truncate_middle("0x1234567890abcdef", 4, 4), "0x12...cdef");
//! assert_eq!(kebab_case("helloWorld"), "hello-world");
//! assert_eq!(slugify("Café & Restaurant"), "cafe-restaurant");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod envelope;
pub mod error;
pub mod html;
pub mod slug;
pub mod transform;

pub use case::{camel_case, kebab_case, pascal_case, snake_case};
pub use envelope::{ErrorEnvelope, normalize_error_message, normalize_txn_error};
pub use error::{Error, Result};
pub use html::{escape_html, strip_html};
pub use slug::slugify;
pub use transform::{
    capitalize, get_initials, get_initials_max, mask_string, mask_string_with, remove_whitespace,
    reverse, truncate, truncate_middle, truncate_middle_with, truncate_with, word_count,
};
