//! URL-friendly slugs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug filter regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Combining diacritical marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Turn arbitrary text into a slug.
///
/// Accents are folded (`é` → `e`), everything is lowercased, characters
/// outside `[a-z0-9]`, whitespace and `-` are dropped, whitespace runs
/// become a single hyphen and leading/trailing hyphens are removed. The
/// result is either empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn slugify(text: &str) -> String {
    let folded: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = folded.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&kept, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");

    let slug = collapsed.as_ref();
    let slug = slug.strip_prefix('-').unwrap_or(slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static SLUG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("Café & Restaurant"), "cafe-restaurant");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("Special@#$%Characters"), "specialcharacters");
    }

    #[test]
    fn test_slugify_collapses_hyphens() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--edge--"), "edge");
        assert_eq!(slugify("-"), "");
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Ångström"), "angstrom");
    }

    #[test]
    fn test_slugify_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("日本語"), "");
    }

    proptest! {
        #[test]
        fn slug_is_empty_or_well_formed(text in "\\PC{0,48}") {
            let slug = slugify(&text);
            prop_assert!(slug.is_empty() || SLUG.is_match(&slug), "bad slug {:?}", slug);
        }
    }
}
