//! General-purpose string transforms.

/// Suffix appended by [`truncate`].
pub const DEFAULT_SUFFIX: &str = "...";

/// Characters kept on each side by [`truncate_middle`].
pub const DEFAULT_MIDDLE_KEEP: usize = 4;

/// Unmasked trailing characters for [`mask_string`].
pub const DEFAULT_VISIBLE_CHARS: usize = 4;

/// Words considered by [`get_initials`].
pub const DEFAULT_MAX_INITIALS: usize = 2;

/// Uppercase the first character, leaving the rest unchanged.
///
/// ```
/// assert_eq!(textkit::capitalize("hello world"), "Hello world");
/// assert_eq!(textkit::capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate to `max_len` characters and append `"..."`.
///
/// The suffix is appended after cutting, so the result may be up to
/// `max_len + 3` characters long.
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with(text, max_len, DEFAULT_SUFFIX)
}

/// Truncate to `max_len` characters and append `suffix`.
pub fn truncate_with(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max_len).collect();
    out.push_str(suffix);
    out
}

/// Keep `head` leading and `tail` trailing characters, joined by `"..."`.
///
/// Useful for addresses and hashes. Text that already fits is returned
/// unchanged.
pub fn truncate_middle(text: &str, head: usize, tail: usize) -> String {
    truncate_middle_with(text, head, tail, DEFAULT_SUFFIX)
}

/// [`truncate_middle`] with a custom ellipsis.
pub fn truncate_middle_with(text: &str, head: usize, tail: usize, ellipsis: &str) -> String {
    let len = text.chars().count();
    if len <= head + tail {
        return text.to_string();
    }

    let start: String = text.chars().take(head).collect();
    let end: String = text.chars().skip(len - tail).collect();
    format!("{start}{ellipsis}{end}")
}

/// Remove every Unicode whitespace character.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Uppercased first letters of the first two words.
pub fn get_initials(name: &str) -> String {
    get_initials_max(name, DEFAULT_MAX_INITIALS)
}

/// Uppercased first letters of the first `max` words.
pub fn get_initials_max(name: &str, max: usize) -> String {
    name.split_whitespace()
        .take(max)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Mask all but the last `visible` characters with `*`.
pub fn mask_string(text: &str, visible: usize) -> String {
    mask_string_with(text, visible, '*')
}

/// Mask all but the last `visible` characters with `mask`.
///
/// Text no longer than `visible` is returned unchanged.
pub fn mask_string_with(text: &str, visible: usize, mask: char) -> String {
    let len = text.chars().count();
    if len <= visible {
        return text.to_string();
    }

    let mut out: String = std::iter::repeat_n(mask, len - visible).collect();
    out.extend(text.chars().skip(len - visible));
    out
}

/// Reverse the character sequence.
///
/// Works on scalar values: combining marks and multi-scalar emoji are not
/// kept together.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("HELLO"), "HELLO");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "Hello...");
        assert_eq!(truncate_with("Hello World", 5, "!"), "Hello!");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("0x1234567890abcdef", 4, 4), "0x12...cdef");
        assert_eq!(truncate_middle("verylongaddress", 3, 3), "ver...ess");
        assert_eq!(truncate_middle("short", 4, 4), "short");
        assert_eq!(truncate_middle_with("abcdefghij", 2, 2, "…"), "ab…ij");
        assert_eq!(truncate_middle("abcdefghij", 3, 0), "abc...");
    }

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace("hello world"), "helloworld");
        assert_eq!(remove_whitespace(" h e l l o "), "hello");
        assert_eq!(remove_whitespace("hello\tworld\n"), "helloworld");
        assert_eq!(remove_whitespace("no\u{00a0}break"), "nobreak");
    }

    #[test]
    fn test_get_initials() {
        assert_eq!(get_initials("John Doe"), "JD");
        assert_eq!(get_initials_max("Mary Jane Watson", 3), "MJW");
        assert_eq!(get_initials("Mary Jane Watson"), "MJ");
        assert_eq!(get_initials("SingleName"), "S");
        assert_eq!(get_initials(""), "");
        assert_eq!(get_initials("   "), "");
        assert_eq!(get_initials("  ada   lovelace "), "AL");
    }

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("1234567890", 4), "******7890");
        assert_eq!(mask_string("secret", 2), "****et");
        assert_eq!(mask_string("short", 10), "short");
        assert_eq!(mask_string_with("password", 4, 'x'), "xxxxword");
        assert_eq!(mask_string("abc", 0), "***");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse("12345"), "54321");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("  multiple   spaces  "), 2);
        assert_eq!(word_count("single"), 1);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    proptest! {
        #[test]
        fn capitalize_is_idempotent(text in "[a-zA-Z0-9 _-]{0,32}") {
            let once = capitalize(&text);
            prop_assert_eq!(capitalize(&once), once);
        }

        #[test]
        fn truncate_respects_bound(text in "\\PC{0,64}", n in 0usize..40) {
            let out = truncate(&text, n);
            prop_assert!(out.chars().count() <= n + DEFAULT_SUFFIX.len());
            if text.chars().count() <= n {
                prop_assert_eq!(out, text);
            }
        }

        #[test]
        fn reverse_is_an_involution(text in "\\PC{0,64}") {
            prop_assert_eq!(reverse(&reverse(&text)), text);
        }
    }
}
