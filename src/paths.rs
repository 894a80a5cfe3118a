//! Path resolution for helpers
//!
//! The config file location is resolved in this order:
//! 1. `HELPERS_CONFIG` env var (`~` and `$VARS` are expanded)
//! 2. `$XDG_CONFIG_HOME/helpers/config.toml`
//! 3. `~/.config/helpers/config.toml`

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that points at the config file
pub const ENV_CONFIG_FILE: &str = "HELPERS_CONFIG";

const APP_DIR: &str = "helpers";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the config file path
pub fn config_file() -> Result<PathBuf> {
    if let Ok(file) = std::env::var(ENV_CONFIG_FILE) {
        let path = expand(&file);
        log::debug!("Using config file from {}: {}", ENV_CONFIG_FILE, path.display());
        return Ok(path);
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        let path = expand(&xdg).join(APP_DIR).join(CONFIG_FILE_NAME);
        log::debug!("Using XDG config file: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".config").join(APP_DIR).join(CONFIG_FILE_NAME);
    log::debug!("Using default config file: {}", path.display());
    Ok(path)
}

/// Expand `~` and environment variables in a path string.
///
/// Unknown variables are left as written.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}
