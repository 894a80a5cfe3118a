use anyhow::{Context as _, Result, bail};
use numkit::{Locale, NumberFormatter};

use crate::Context;
use crate::cli::NumberCommand;

pub fn run(ctx: &Context, cmd: NumberCommand) -> Result<()> {
    let output = match cmd {
        NumberCommand::Format {
            value,
            min_fraction,
            max_fraction,
            locale,
        } => numkit::format_number_in(
            value,
            locale_for(ctx, locale.as_deref()),
            min_fraction,
            max_fraction,
        ),
        NumberCommand::Currency {
            value,
            currency,
            locale,
        } => {
            let code = currency.as_deref().unwrap_or(&ctx.config.currency);
            let locale = locale_for(ctx, locale.as_deref());
            NumberFormatter::currency(locale, code)
                .with_context(|| format!("Cannot format money in '{code}'"))?
                .format(value)
        }
        NumberCommand::Compact { value } => numkit::format_compact(value),
        NumberCommand::Percent {
            value,
            decimals,
            locale,
        } => numkit::format_percentage_in(value, decimals, locale_for(ctx, locale.as_deref())),
        NumberCommand::Fixed { value, digits } => numkit::to_fixed(value, digits),
        NumberCommand::Round { value, decimals } => numkit::round_to(value, decimals).to_string(),
        NumberCommand::Clamp { value, min, max } => numkit::clamp(value, min, max).to_string(),
        NumberCommand::Random { min, max } => numkit::random_between(min, max).to_string(),
        NumberCommand::Bytes { bytes, decimals } => numkit::format_bytes(bytes, decimals),
        NumberCommand::FileSize { bytes } => numkit::format_file_size(bytes),
        NumberCommand::Parity { value } => parity(value).to_string(),
        NumberCommand::Sum { values } => numkit::sum(&values).to_string(),
        NumberCommand::Average { values } => numkit::average(&values).to_string(),
        NumberCommand::Ordinal { n } => numkit::to_ordinal(n),
        NumberCommand::Check { text } => match numkit::parse_number(&text) {
            Some(value) if numkit::is_valid_number(value) => value.to_string(),
            _ => bail!("'{text}' is not a finite number"),
        },
    };

    // Non-finite input formats to nothing
    if output.is_empty() {
        bail!("Nothing to format: the value is not a finite number");
    }

    println!("{output}");
    Ok(())
}

/// Locale from the flag, else from the config file.
fn locale_for(ctx: &Context, flag: Option<&str>) -> Locale {
    let tag = flag.unwrap_or(&ctx.config.locale);
    let locale = Locale::resolve(tag);
    if !locale.tag.eq_ignore_ascii_case(tag) {
        log::debug!("Locale '{tag}' resolved to {locale}");
    }
    locale
}

fn parity(value: i64) -> &'static str {
    if numkit::is_odd(value) { "odd" } else { "even" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpersConfig;

    fn ctx(locale: &str) -> Context {
        Context {
            verbose: 0,
            quiet: false,
            config: HelpersConfig {
                locale: locale.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_locale_flag_overrides_config() {
        let ctx = ctx("de-DE");
        assert_eq!(locale_for(&ctx, None).tag, "de-DE");
        assert_eq!(locale_for(&ctx, Some("fr")).tag, "fr-FR");
        assert_eq!(locale_for(&ctx, Some("xx-YY")).tag, "en-US");
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(-2), "even");
        assert_eq!(parity(7), "odd");
    }
}
