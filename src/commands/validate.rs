use anyhow::{Result, bail};
use clap::ValueEnum;

use crate::Context;
use crate::cli::{ValidateArgs, ValidationKind};
use crate::ui;

pub fn run(ctx: &Context, args: ValidateArgs) -> Result<()> {
    let name = kind_name(args.kind);
    let valid = check(ctx, &args)?;
    let shown = args.value.as_deref().unwrap_or("<none>");
    log::debug!("{name} check on '{shown}': {valid}");

    if !valid {
        bail!("invalid {name}: {shown}");
    }
    if !ctx.quiet {
        ui::success(&format!("valid {name}"));
    }
    Ok(())
}

fn kind_name(kind: ValidationKind) -> String {
    kind.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn check(ctx: &Context, args: &ValidateArgs) -> Result<bool> {
    let value = args.value.as_deref();
    let text = value.unwrap_or_default();

    let valid = match args.kind {
        ValidationKind::Empty => validkit::is_empty(value),
        ValidationKind::Email => validkit::is_valid_email(text),
        ValidationKind::Url => validkit::is_valid_url(text),
        ValidationKind::Password => validkit::is_strong_password(text),
        ValidationKind::Phone => validkit::is_valid_phone_number(text),
        ValidationKind::CreditCard => validkit::is_valid_credit_card(text),
        ValidationKind::Ipv4 => validkit::is_valid_ipv4(text),
        ValidationKind::HexColor => validkit::is_valid_hex_color(text),
        ValidationKind::Uuid => validkit::is_valid_uuid(text),
        ValidationKind::Alpha => validkit::is_alpha(text),
        ValidationKind::Alphanumeric => validkit::is_alphanumeric(text),
        ValidationKind::Numeric => validkit::is_numeric(text),
        ValidationKind::Json => validkit::is_valid_json(text),
        ValidationKind::Slug => validkit::is_valid_slug(text),
        ValidationKind::PostalCode => {
            let country = args.country.as_deref().unwrap_or(&ctx.config.country);
            validkit::is_valid_postal_code_for(text, country)
        }
        ValidationKind::MinLength => {
            let Some(min) = args.min else {
                bail!("min-length needs --min");
            };
            validkit::has_min_length(value, length_bound(min)?)
        }
        ValidationKind::MaxLength => {
            let Some(max) = args.max else {
                bail!("max-length needs --max");
            };
            validkit::has_max_length(value, length_bound(max)?)
        }
        ValidationKind::Range => {
            let (Some(min), Some(max)) = (args.min, args.max) else {
                bail!("range needs both --min and --max");
            };
            numkit::parse_number(text).is_some_and(|v| validkit::is_in_range(v, min, max))
        }
    };
    Ok(valid)
}

fn length_bound(bound: f64) -> Result<usize> {
    if bound < 0.0 || bound.fract() != 0.0 || !bound.is_finite() {
        bail!("length bound must be a whole number, got {bound}");
    }
    Ok(bound as usize)
}
