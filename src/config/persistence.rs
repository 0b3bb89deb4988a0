use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabsplit/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabsplit").join("config.ron"))
}

/// Reads and parses a config file, sanitizing unusable values.
pub fn load_config_from(path: &Path) -> anyhow::Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: AppConfig = ron::from_str(&contents)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config.sanitized())
}

/// Loads the config from the default location, falling back to defaults on
/// any error. A missing file is not worth a warning.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        warn!("{e:#}; using default config");
        AppConfig::default()
    })
}

/// Writes the config as pretty RON, creating parent directories.
pub fn save_config_to(path: &Path, config: &AppConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config dir {}", dir.display()))?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty).context("serializing config")?;
    fs::write(path, serialized).with_context(|| format!("writing config {}", path.display()))
}

/// Persists the config to the default location. Failures are logged.
pub fn save_config(config: &AppConfig) {
    let Some(path) = config_path() else {
        warn!("no config directory; settings not saved");
        return;
    };
    if let Err(e) = save_config_to(&path, config) {
        warn!("{e:#}");
    }
}
