use crate::output::colorize::{Colorize, ColorizePreference};
use browserino::error::{BrowserinoError, Result};
use browserino::import_export::SettingsDocument;
use browserino::store::Preferences;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "toml" => OutputFormat::Toml,
            _ => OutputFormat::Colored,
        }
    }

    pub fn render_preferences(self, preferences: &Preferences, no_color: bool) -> Result<String> {
        match self {
            // Same bytes an export would write
            OutputFormat::Json => {
                let bytes = SettingsDocument::new(preferences.clone()).encode()?;
                String::from_utf8(bytes).map_err(|e| BrowserinoError::Other(e.to_string()))
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(preferences)?.trim_end().to_string()),
            OutputFormat::Toml => toml::to_string(preferences)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| BrowserinoError::Other(format!("TOML error: {}", e))),
            OutputFormat::Colored => Ok(preferences
                .iter()
                .map(|(key, value)| ColorizePreference(key, value).render(no_color))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
