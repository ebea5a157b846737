use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

/// Overrides the base directory for all calculator files.
pub const HOME_ENV_VAR: &str = "CGPA_CALC_HOME";
const APP_DIR: &str = "cgpa_calc";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes the preferences file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Stores the config under `<base>/config/config.json`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(CONFIG_FILE)))
    }

    /// Uses `$CGPA_CALC_HOME` when set, otherwise the platform config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var_os(HOME_ENV_VAR) {
            Some(home) => PathBuf::from(home),
            None => dirs::config_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        };
        Self::with_base_dir(base)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored config, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default())
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Writes a sibling `.tmp` file, then renames it over the target.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.config_path)?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .config_path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| CONFIG_FILE.into());
        name.push(".tmp");
        self.config_path.with_file_name(name)
    }
}
