use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{AppConfig, ConfigError};
use crate::utils::{paths, persistence};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Handles persistence for [`AppConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager rooted at the application home (`PAYDAY_BUDGET_HOME` or `~/.payday_budget`).
    pub fn from_default_home() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        persistence::write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), AppConfig::default());
        assert!(manager.config_path().ends_with("config/config.json"));
    }

    #[test]
    fn persists_and_loads_config() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let config = AppConfig {
            auto_settle_elapsed: false,
            placeholder_title: "Sans titre".into(),
            data_dir: Some(dir.path().join("data")),
            ..AppConfig::default()
        };
        manager.save(&config).expect("save config");
        assert_eq!(manager.load().expect("load config"), config);
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), r#"{"auto_settle_elapsed": false}"#).unwrap();

        let loaded = manager.load().unwrap();
        assert!(!loaded.auto_settle_elapsed);
        assert_eq!(loaded.placeholder_title, "Untitled");
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), "{").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
