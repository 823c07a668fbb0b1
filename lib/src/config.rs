use crate::error::{BrowserinoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name suggested for exported settings files
pub const DEFAULT_EXPORT_FILENAME: &str = "browserino-settings.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier this application is registered under as a URL handler
    #[serde(default = "default_bundle_id")]
    pub bundle_id: String,

    /// File name used by `export` when no path is given
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Preference database location (defaults to the data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundle_id: default_bundle_id(),
            export_filename: default_export_filename(),
            store_path: None,
        }
    }
}

fn default_bundle_id() -> String {
    "xyz.alexstrnik.Browserino".to_string()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        if config.bundle_id.trim().is_empty() {
            return Err(BrowserinoError::Config(
                "bundle_id must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load configuration from default location (~/.config/browserino/config.yml)
    /// Falls back to default config if the file is missing or unreadable
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Preference database path, honouring `store_path` when set
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(crate::utils::get_default_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bundle_id, "xyz.alexstrnik.Browserino");
        assert_eq!(config.export_filename, "browserino-settings.json");
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let original = Config {
            bundle_id: "org.example.Picker".to_string(),
            export_filename: "prefs.json".to_string(),
            store_path: Some(PathBuf::from("/tmp/prefs.db")),
        };

        original.save_to_path(config_path).unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(original, loaded);
        assert_eq!(loaded.store_path(), PathBuf::from("/tmp/prefs.db"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(result, Err(BrowserinoError::Yaml(_))));
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "export_filename: mine.json\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.bundle_id, default_bundle_id());
        assert_eq!(config.export_filename, "mine.json");
    }

    #[test]
    fn test_load_empty_bundle_id() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "bundle_id: \"  \"\n").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(result, Err(BrowserinoError::Config(_))));
    }
}
