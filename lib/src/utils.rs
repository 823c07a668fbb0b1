use std::path::PathBuf;

/// Directory holding Browserino's preference database
///
/// `BROWSERINO_DATA_DIR` replaces the whole lookup, so tests and scripted runs can point
/// the CLI at a throwaway store. Otherwise the XDG data directory is used.
pub fn get_default_datadir() -> PathBuf {
    if let Ok(path) = std::env::var("BROWSERINO_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("browserino");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/browserino");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("browserino");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Directory searched for `config.yml`
pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("browserino");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/browserino");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("browserino");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Default location of the preference database
pub fn get_default_store_path() -> PathBuf {
    get_default_datadir().join("preferences.db")
}
