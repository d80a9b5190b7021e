//! User preferences and their JSON persistence.
//!
//! Only preferences live on disk; ingredient data is process-lifetime only.

use serde::{de::Deserializer, Deserialize, Serialize};
use std::{
    env, fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::StorageLocation;
use crate::errors::ConfigError;

pub const HOME_ENV: &str = "PANTRY_CORE_HOME";
const APP_DIR: &str = "pantry_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores user-configurable preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Last day-count still flagged as expiring soon.
    #[serde(default = "Config::default_urgency_threshold")]
    pub urgency_threshold_days: i64,
    /// Days added to the purchase date when no expiration is given.
    #[serde(default = "Config::default_shelf_life")]
    pub default_shelf_life_days: i64,
    #[serde(default)]
    pub default_storage: StorageLocation,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub load_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urgency_threshold_days: Self::default_urgency_threshold(),
            default_shelf_life_days: Self::default_shelf_life(),
            default_storage: StorageLocation::default(),
            theme: Theme::default(),
            ui_color_enabled: true,
            load_sample_data: true,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 6] = [
        "urgency_threshold_days",
        "default_shelf_life_days",
        "default_storage",
        "theme",
        "ui_color_enabled",
        "load_sample_data",
    ];

    fn default_urgency_threshold() -> i64 {
        2
    }

    fn default_shelf_life() -> i64 {
        7
    }

    fn default_true() -> bool {
        true
    }

    /// Updates one setting from its textual form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        match key {
            "urgency_threshold_days" => {
                self.urgency_threshold_days = parse_days(value).ok_or_else(|| {
                    invalid("expected a non-negative whole number of days")
                })?;
            }
            "default_shelf_life_days" => {
                self.default_shelf_life_days = parse_days(value).ok_or_else(|| {
                    invalid("expected a non-negative whole number of days")
                })?;
            }
            "default_storage" => {
                self.default_storage = value
                    .parse()
                    .map_err(|_| invalid("expected refrigerated, frozen, or ambient"))?;
            }
            "theme" => self.theme = Theme::from_str(value),
            "ui_color_enabled" => {
                self.ui_color_enabled =
                    parse_flag(value).ok_or_else(|| invalid("expected on or off"))?;
            }
            "load_sample_data" => {
                self.load_sample_data =
                    parse_flag(value).ok_or_else(|| invalid("expected on or off"))?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("urgency_threshold_days", self.urgency_threshold_days.to_string()),
            ("default_shelf_life_days", self.default_shelf_life_days.to_string()),
            ("default_storage", self.default_storage.to_string()),
            ("theme", self.theme.to_string()),
            ("ui_color_enabled", on_off(self.ui_color_enabled).into()),
            ("load_sample_data", on_off(self.load_sample_data).into()),
        ]
    }
}

fn parse_days(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|days| *days >= 0)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Presentation theme: `iconic` shows ingredient glyphs, `plain` sticks to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    /// Lenient parse: anything other than `plain` selects the iconic theme.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

/// Handles persistence of [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$PANTRY_CORE_HOME`, falling back to the platform config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(Self::resolve_base())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    fn resolve_base() -> PathBuf {
        if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return PathBuf::from(home);
        }
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Reads the stored config, or the defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the config through a temporary file so a failed write keeps the old file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme": "plain"}"#).unwrap();
        assert_eq!(config.theme, Theme::Plain);
        assert_eq!(config.urgency_threshold_days, 2);
        assert_eq!(config.default_shelf_life_days, 7);
        assert!(config.load_sample_data);
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("default_storage", "냉동").unwrap();
        assert_eq!(config.default_storage, StorageLocation::Frozen);
        config.set("ui_color_enabled", "off").unwrap();
        assert!(!config.ui_color_enabled);

        assert!(matches!(
            config.set("urgency_threshold_days", "-1"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("locale", "ko-KR"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/tmp/config.json"));
        assert_eq!(tmp, PathBuf::from("/tmp/config.json.tmp"));
    }
}
