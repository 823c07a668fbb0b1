use crate::error::Result;
use crate::models::PrefValue;
use crate::store::PreferenceStore;

pub const CLOSE_AFTER_COPY_KEY: &str = "copy_closeAfterCopy";
pub const ALTERNATIVE_SHORTCUT_KEY: &str = "copy_alternativeShortcut";
pub const BROWSERS_KEY: &str = "browsers";

/// Toggles shown on the General preferences tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Close the prompt after copying a URL
    CloseAfterCopy,
    /// Copy with Command+C instead of Command+Option+C
    AlternativeShortcut,
}

impl Toggle {
    pub fn key(&self) -> &'static str {
        match self {
            Toggle::CloseAfterCopy => CLOSE_AFTER_COPY_KEY,
            Toggle::AlternativeShortcut => ALTERNATIVE_SHORTCUT_KEY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Toggle::CloseAfterCopy => "Close prompt view after copying URL",
            Toggle::AlternativeShortcut => "Use Command+C instead of Command+Option+C",
        }
    }

    /// Parse a toggle name, accepting the preference key or a short alias
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            CLOSE_AFTER_COPY_KEY => Some(Toggle::CloseAfterCopy),
            ALTERNATIVE_SHORTCUT_KEY => Some(Toggle::AlternativeShortcut),
            _ => match s.to_lowercase().replace('_', "-").as_str() {
                "close-after-copy" => Some(Toggle::CloseAfterCopy),
                "alternative-shortcut" => Some(Toggle::AlternativeShortcut),
                _ => None,
            },
        }
    }
}

/// Typed view of the General tab's preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralPreferences {
    pub close_after_copy: bool,
    pub alternative_shortcut: bool,
    /// Installed browsers, as stored by the last rescan
    pub browsers: Vec<String>,
}

impl GeneralPreferences {
    /// Read from the store; missing or wrongly typed values fall back to defaults
    pub fn load<S: PreferenceStore>(store: &S) -> Result<Self> {
        Ok(Self {
            close_after_copy: get_toggle(store, Toggle::CloseAfterCopy)?,
            alternative_shortcut: get_toggle(store, Toggle::AlternativeShortcut)?,
            browsers: store
                .get(BROWSERS_KEY)?
                .as_ref()
                .and_then(PrefValue::as_sequence)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

pub fn get_toggle<S: PreferenceStore>(store: &S, toggle: Toggle) -> Result<bool> {
    Ok(store
        .get(toggle.key())?
        .as_ref()
        .and_then(PrefValue::as_bool)
        .unwrap_or(false))
}

pub fn set_toggle<S: PreferenceStore>(store: &S, toggle: Toggle, enabled: bool) -> Result<()> {
    store.set(toggle.key(), PrefValue::Bool(enabled))
}

/// Remove every preference, returning how many keys were removed
pub fn reset_preferences<S: PreferenceStore>(store: &S) -> Result<usize> {
    let removed = store.clear()?;
    log::info!("Reset {} preference(s)", removed);
    Ok(removed)
}
