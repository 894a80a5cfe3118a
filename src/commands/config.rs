use anyhow::Result;

use crate::cli::ConfigCommand;
use crate::config::HelpersConfig;
use crate::paths;
use crate::ui;

pub fn run(quiet: bool, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(),
        ConfigCommand::Init { force } => init(quiet, force),
        ConfigCommand::Path => {
            println!("{}", paths::config_file()?.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = paths::config_file()?;
    let config = HelpersConfig::load_from(&path)?;

    ui::header("Configuration");
    ui::kv("File", &path.display().to_string());
    if !path.exists() {
        ui::dim("Not found, showing defaults");
    }
    println!();

    ui::kv("locale", &format!("{} ({})", config.locale, config.locale()));
    ui::kv("currency", &config.currency);
    ui::kv("country", &config.country);
    ui::kv("week_start", &config.week_start);
    ui::kv("date_format", &config.date_format);
    ui::kv("time_format", &config.time_format);
    ui::kv("datetime_format", &config.datetime_format);

    println!();
    ui::dim("Use 'helpers config init' to write a starter file.");
    Ok(())
}

fn init(quiet: bool, force: bool) -> Result<()> {
    let path = paths::config_file()?;

    if path.exists() && !force {
        ui::warn(&format!("{} already exists", path.display()));
        ui::info("Use --force to overwrite it");
        return Ok(());
    }

    HelpersConfig::default().save_to(&path)?;
    if !quiet {
        ui::success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
