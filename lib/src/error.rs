/// Custom error type for the browserino library
///
/// Every failure of a user-triggered operation (export, import, reset, default-browser
/// registration) ends up as one of these variants. Using `thiserror` for the `Error`
/// impl and the `From` conversions used by `?`.
#[derive(Debug, thiserror::Error)]
pub enum BrowserinoError {
    /// Imported bytes are not JSON, or the top-level value is not an object
    #[error("Corrupt settings document: {0}")]
    CorruptDocument(String),

    /// The settings file could not be read or written
    #[error("File picker failure: {0}")]
    PickerFailure(String),

    /// No file was chosen
    #[error("No file selected")]
    PickerCancelled,

    /// A preference value cannot be represented in JSON
    #[error("Cannot encode settings: {0}")]
    EncodeFailure(String),

    /// Preference database errors (SQLite)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors outside of document decoding
    #[error("JSON error: {0}")]
    Json(String),

    /// OS URL-scheme handler registry errors
    #[error("Default browser handler error: {0}")]
    Handler(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using BrowserinoError
pub type Result<T> = std::result::Result<T, BrowserinoError>;

impl From<String> for BrowserinoError {
    fn from(s: String) -> Self {
        BrowserinoError::Other(s)
    }
}

impl From<&str> for BrowserinoError {
    fn from(s: &str) -> Self {
        BrowserinoError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for BrowserinoError {
    fn from(err: serde_yaml::Error) -> Self {
        BrowserinoError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for BrowserinoError {
    fn from(err: serde_json::Error) -> Self {
        BrowserinoError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BrowserinoError::CorruptDocument("expected an object".to_string());
        assert_eq!(
            err.to_string(),
            "Corrupt settings document: expected an object"
        );
        assert_eq!(BrowserinoError::PickerCancelled.to_string(), "No file selected");
    }

    #[test]
    fn test_from_str() {
        let err: BrowserinoError = "boom".into();
        assert!(matches!(err, BrowserinoError::Other(ref s) if s == "boom"));
    }
}
