//! Identifier case conversion.
//!
//! Word boundaries are separator runs (space, hyphen, underscore) and
//! lowercase-to-uppercase transitions. The conversions are lossy: going
//! through one style and back does not restore the original separators.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static SEPARATOR_THEN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+(.)?").expect("valid separator regex"));

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid transition regex"));

static SPACE_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid kebab separator regex"));

static SPACE_OR_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid snake separator regex"));

/// Drop separator runs and uppercase the character after each run.
fn join_words(text: &str) -> String {
    SEPARATOR_THEN_CHAR
        .replace_all(text, |caps: &Captures<'_>| {
            caps.get(1)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

/// `hello world` → `helloWorld`
pub fn camel_case(text: &str) -> String {
    let mut out = join_words(text);
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_lowercase();
    }
    out
}

/// `hello world` → `HelloWorld`
pub fn pascal_case(text: &str) -> String {
    let mut out = join_words(text);
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// `helloWorld` → `hello-world`
pub fn kebab_case(text: &str) -> String {
    let split = LOWER_UPPER.replace_all(text, "${1}-${2}");
    SPACE_OR_UNDERSCORE
        .replace_all(&split, "-")
        .to_lowercase()
}

/// `helloWorld` → `hello_world`
pub fn snake_case(text: &str) -> String {
    let split = LOWER_UPPER.replace_all(text, "${1}_${2}");
    SPACE_OR_HYPHEN.replace_all(&split, "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("hello world"), "helloWorld");
        assert_eq!(camel_case("hello-world"), "helloWorld");
        assert_eq!(camel_case("hello_world"), "helloWorld");
        assert_eq!(camel_case("Hello World"), "helloWorld");
        assert_eq!(camel_case("helloWorld"), "helloWorld");
        assert_eq!(camel_case("trailing-"), "trailing");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("hello world"), "HelloWorld");
        assert_eq!(pascal_case("hello-world"), "HelloWorld");
        assert_eq!(pascal_case("hello_world"), "HelloWorld");
        assert_eq!(pascal_case("multi  word__name"), "MultiWordName");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("helloWorld"), "hello-world");
        assert_eq!(kebab_case("Hello World"), "hello-world");
        assert_eq!(kebab_case("hello_world"), "hello-world");
        assert_eq!(kebab_case("someXMLParser"), "some-xmlparser");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("helloWorld"), "hello_world");
        assert_eq!(snake_case("Hello World"), "hello_world");
        assert_eq!(snake_case("hello-world"), "hello_world");
    }

    #[test]
    fn test_conversions_are_lossy() {
        assert_eq!(camel_case(&kebab_case("hello_world")), "helloWorld");
        assert_eq!(snake_case(&camel_case("a-b")), "a_b");
        assert_ne!(kebab_case(&snake_case("hello-world")), "hello_world");
    }

    #[test]
    fn test_non_ascii_first_char_is_left_alone() {
        assert_eq!(camel_case("Écran plat"), "ÉcranPlat");
    }
}
