use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::{Level, LogConfig};

/// Top-level configuration for Shroud.
///
/// Loaded from `~/.config/shroud/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global hotkey settings.
    pub hotkey: HotkeyConfig,
    /// File logging settings.
    pub log: LogConfig,
}

/// Global hotkey configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Key name that toggles the target's windows (e.g. "F9", "A").
    ///
    /// Validity is checked when the key is armed, not at load time,
    /// so an unknown name here surfaces as a CLI error rather than a
    /// silently replaced default.
    pub key: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self { key: "F9".into() }
    }
}

impl Config {
    /// Clamps values to safe ranges and normalizes the log level.
    pub fn validate(&mut self) {
        self.log.max_file_mb = self.log.max_file_mb.clamp(1, 512);
        if Level::parse(&self.log.level).is_none() {
            self.log.level = "info".into();
        }
    }
}

/// Returns the config directory: `~/.config/shroud/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("shroud"))
}

/// Returns the config file path: `~/.config/shroud/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; a present-but-broken
/// file is warned about and defaults are used.
pub fn load() -> Config {
    let exists = config_path().is_some_and(|p| p.exists());
    if !exists {
        return Config::default();
    }
    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns the commented default `config.toml` written by `shroud init`.
pub fn template() -> String {
    r#"# Shroud configuration

[hotkey]
# Key that toggles the target's windows while `shroud watch` runs.
# Letters, digits, F1-F24, and named keys (Enter, Space, Escape, ...)
# are accepted, case-insensitively.
key = "F9"

[log]
# Write a log file to ~/.config/shroud/logs/shroud.log
enabled = false
# Minimum level: "debug", "info", "warn", or "error"
level = "info"
# Rotate the log file once it exceeds this many megabytes
max_file_mb = 10
"#
    .to_string()
}
