use anyhow::{Context as _, Result};
use clap::ValueEnum;
use constkit::display::{breakpoints, colors, date_formats, defaults};
use constkit::{Country, Currency, Environment, HttpStatus, app, patterns, units};
use serde_json::{Map, Value, json};

use crate::Context;
use crate::cli::ConstantTable;
use crate::ui;

pub fn run(_ctx: &Context, table: Option<ConstantTable>, as_json: bool) -> Result<()> {
    let tables: Vec<ConstantTable> = match table {
        Some(table) => vec![table],
        None => ConstantTable::value_variants().to_vec(),
    };

    if as_json {
        let out = match table {
            Some(t) => table_value(t),
            None => Value::Object(
                tables
                    .iter()
                    .map(|&t| (table_name(t), table_value(t)))
                    .collect(),
            ),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("Failed to serialize constants")?
        );
        return Ok(());
    }

    for t in tables {
        ui::section(&table_name(t));
        match table_value(t) {
            Value::Object(entries) => {
                for (key, value) in entries {
                    ui::kv(&key, &plain(&value));
                }
            }
            Value::Array(items) => {
                for item in items {
                    ui::dim(&plain(&item));
                }
            }
            other => ui::dim(&plain(&other)),
        }
    }
    Ok(())
}

fn table_name(table: ConstantTable) -> String {
    table
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

/// Strings print without JSON quotes.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pairs<V: Into<Value> + Copy>(entries: &[(&str, V)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|&(key, value)| (key.to_string(), value.into()))
            .collect(),
    )
}

fn table_value(table: ConstantTable) -> Value {
    match table {
        ConstantTable::Http => Value::Object(
            HttpStatus::ALL
                .iter()
                .map(|s| (s.name().to_string(), json!(s.code())))
                .collect(),
        ),
        ConstantTable::Patterns => pairs(&patterns::ALL),
        ConstantTable::FileSizes => pairs(&units::FILE_SIZES),
        ConstantTable::Time => pairs(&units::TIME),
        ConstantTable::DateFormats => pairs(&date_formats::ALL),
        ConstantTable::Breakpoints => pairs(&breakpoints::ALL),
        ConstantTable::Colors => {
            let mut map = match pairs(&colors::ALL) {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            for (shade, hex) in colors::GRAY {
                map.insert(format!("GRAY_{shade}"), json!(hex));
            }
            Value::Object(map)
        }
        ConstantTable::Api => json!({
            "DEFAULT_PAGE_SIZE": app::api::DEFAULT_PAGE_SIZE,
            "MAX_PAGE_SIZE": app::api::MAX_PAGE_SIZE,
            "DEFAULT_TIMEOUT": millis(app::api::DEFAULT_TIMEOUT),
            "RETRY_ATTEMPTS": app::api::RETRY_ATTEMPTS,
            "RETRY_DELAY": millis(app::api::RETRY_DELAY),
        }),
        ConstantTable::StorageKeys => pairs(&app::storage_keys::ALL),
        ConstantTable::Environments => json!(Environment::ALL),
        ConstantTable::Defaults => pairs(&defaults::ALL),
        ConstantTable::Currencies => json!(Currency::ALL),
        ConstantTable::Countries => json!(Country::ALL),
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_table() {
        let table = table_value(ConstantTable::Http);
        assert_eq!(table["NOT_FOUND"], json!(404));
        assert_eq!(table.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_colors_include_gray_scale() {
        let table = table_value(ConstantTable::Colors);
        assert_eq!(table["PRIMARY"], json!("#3B82F6"));
        assert!(table.get("GRAY_50").is_some());
    }

    #[test]
    fn test_api_durations_in_millis() {
        let table = table_value(ConstantTable::Api);
        assert_eq!(table["DEFAULT_TIMEOUT"], json!(30_000));
        assert_eq!(table["RETRY_DELAY"], json!(1000));
    }

    #[test]
    fn test_enum_tables_serialize_codes() {
        assert_eq!(table_value(ConstantTable::Currencies)[0], json!("USD"));
        assert_eq!(table_value(ConstantTable::Environments)[0], json!("development"));
        assert_eq!(table_value(ConstantTable::Countries)[0], json!("US"));
    }

    #[test]
    fn test_table_names() {
        assert_eq!(table_name(ConstantTable::FileSizes), "file-sizes");
        assert_eq!(plain(&json!("x")), "x");
        assert_eq!(plain(&json!(3)), "3");
    }
}
