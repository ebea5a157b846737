use cgpa_domain::GradingScale;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: [&str; 4] = [
    "default_scale",
    "display_precision",
    "ui_color_enabled",
    "plain_output",
];

const MAX_DISPLAY_PRECISION: u8 = 6;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scale for fresh sessions, stored as `five-point` or `four-point`.
    #[serde(default)]
    pub default_scale: GradingScale,
    #[serde(default = "Config::default_display_precision")]
    pub display_precision: u8,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_scale: GradingScale::default(),
            display_precision: Self::default_display_precision(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
        }
    }
}

impl Config {
    pub fn default_display_precision() -> u8 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Precision clamped to the supported range.
    pub fn precision(&self) -> usize {
        usize::from(self.display_precision.min(MAX_DISPLAY_PRECISION))
    }

    /// Returns the textual value stored under `key`.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "default_scale" => Ok(self.default_scale.key().to_string()),
            "display_precision" => Ok(self.display_precision.to_string()),
            "ui_color_enabled" => Ok(self.ui_color_enabled.to_string()),
            "plain_output" => Ok(self.plain_output.to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Updates `key` from user text. Scale names are normalized to their
    /// canonical form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "default_scale" => {
                self.default_scale = GradingScale::from_label(value).ok_or_else(invalid)?;
            }
            "display_precision" => {
                let parsed: u8 = value.trim().parse().map_err(|_| invalid())?;
                if parsed > MAX_DISPLAY_PRECISION {
                    return Err(invalid());
                }
                self.display_precision = parsed;
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(value).ok_or_else(invalid)?,
            "plain_output" => self.plain_output = parse_bool(value).ok_or_else(invalid)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
