use anyhow::{Context as _, Result};
use std::io;
use textkit::ErrorEnvelope;

use crate::Context;
use crate::cli::{CaseStyle, TextCommand};

pub fn run(_ctx: &Context, cmd: TextCommand) -> Result<()> {
    let output = match cmd {
        TextCommand::Capitalize { text } => textkit::capitalize(&text),
        TextCommand::Truncate { text, max, suffix } => textkit::truncate_with(&text, max, &suffix),
        TextCommand::TruncateMiddle {
            text,
            head,
            tail,
            ellipsis,
        } => textkit::truncate_middle_with(&text, head, tail, &ellipsis),
        TextCommand::Case { style, text } => convert_case(style, &text),
        TextCommand::Slugify { text } => textkit::slugify(&text),
        TextCommand::RemoveWhitespace { text } => textkit::remove_whitespace(&text),
        TextCommand::Initials { name, max } => textkit::get_initials_max(&name, max),
        TextCommand::Mask {
            text,
            visible,
            mask,
        } => textkit::mask_string_with(&text, visible, mask),
        TextCommand::Reverse { text } => textkit::reverse(&text),
        TextCommand::WordCount { text } => textkit::word_count(&text).to_string(),
        TextCommand::StripHtml { text } => textkit::strip_html(&text),
        TextCommand::EscapeHtml { text } => textkit::escape_html(&text),
        TextCommand::NormalizeError { json, txn } => normalize_error(json, txn)?,
    };

    println!("{output}");
    Ok(())
}

fn convert_case(style: CaseStyle, text: &str) -> String {
    match style {
        CaseStyle::Camel => textkit::camel_case(text),
        CaseStyle::Pascal => textkit::pascal_case(text),
        CaseStyle::Kebab => textkit::kebab_case(text),
        CaseStyle::Snake => textkit::snake_case(text),
    }
}

fn normalize_error(json: Option<String>, txn: bool) -> Result<String> {
    let raw = match json {
        Some(json) => json,
        None => io::read_to_string(io::stdin()).context("Failed to read error object from stdin")?,
    };

    let envelope = read_envelope(&raw)?;
    log::debug!("Normalizing {envelope:?}");

    let message = if txn {
        textkit::normalize_txn_error(&envelope)
    } else {
        textkit::normalize_error_message(&envelope)
    };
    Ok(message.to_string())
}

/// JSON objects must have a known shape; anything that is not JSON at all
/// is taken as a plain message.
fn read_envelope(raw: &str) -> Result<ErrorEnvelope> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => ErrorEnvelope::from_json(&value).context("Unsupported error object"),
        Err(e) => {
            log::debug!("Not JSON ({e}), using the text as the message");
            Ok(ErrorEnvelope::plain(raw.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_envelope_shapes() {
        let response = read_envelope(r#"{"response":{"data":{"message":"Not found"}}}"#).unwrap();
        assert_eq!(response, ErrorEnvelope::response("Not found"));

        let plain = read_envelope(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(plain, ErrorEnvelope::plain("boom"));

        let text = read_envelope("  timed out\n").unwrap();
        assert_eq!(text, ErrorEnvelope::plain("timed out"));
    }

    #[test]
    fn test_read_envelope_rejects_unknown_objects() {
        assert!(read_envelope(r#"{"code": 42}"#).is_err());
        assert!(read_envelope("[1, 2]").is_err());
    }

    #[test]
    fn test_normalize_txn() {
        let msg = normalize_error(
            Some(r#"{"message":"transfer amount exceeds the balance of account"}"#.to_string()),
            true,
        )
        .unwrap();
        assert_eq!(msg, "Insufficient balance");
    }

    #[test]
    fn test_convert_case() {
        assert_eq!(convert_case(CaseStyle::Camel, "hello world"), "helloWorld");
        assert_eq!(convert_case(CaseStyle::Snake, "helloWorld"), "hello_world");
    }
}
