use super::document::SettingsDocument;
use crate::error::{BrowserinoError, Result};
use crate::store::PreferenceStore;
use std::path::Path;

/// Read the raw bytes of the chosen settings file
///
/// `None` means no file was chosen.
pub fn read_document(path: Option<&Path>) -> Result<Vec<u8>> {
    let path = path.ok_or(BrowserinoError::PickerCancelled)?;
    std::fs::read(path)
        .map_err(|e| BrowserinoError::PickerFailure(format!("{}: {}", path.display(), e)))
}

/// Write every entry of `document` into the store, overwriting existing values
///
/// Keys missing from the document are left alone. Returns the number of keys written.
pub fn import_settings<S: PreferenceStore>(store: &S, document: &SettingsDocument) -> Result<usize> {
    if document.is_empty() {
        log::debug!("Imported document is empty, nothing to merge");
        return Ok(0);
    }

    for (key, value) in document.settings() {
        log::debug!("Importing {} ({})", key, value.type_name());
    }
    store.set_many(document.settings())
}

/// Decode `bytes` and merge the result; the store is untouched if decoding fails
pub fn import_settings_from_bytes<S: PreferenceStore>(store: &S, bytes: &[u8]) -> Result<usize> {
    let document = SettingsDocument::decode(bytes)?;
    import_settings(store, &document)
}

/// Import settings from a file, logging the outcome
pub fn import_settings_from_file<S: PreferenceStore>(store: &S, path: Option<&Path>) -> Result<usize> {
    let result = read_document(path).and_then(|bytes| import_settings_from_bytes(store, &bytes));

    match &result {
        Ok(count) => log::info!("Settings imported successfully ({} key(s))", count),
        Err(BrowserinoError::PickerCancelled) => log::info!("Import cancelled"),
        Err(e) => log::error!("Failed to import settings: {}", e),
    }
    result
}
