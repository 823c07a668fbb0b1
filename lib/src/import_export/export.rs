use super::document::SettingsDocument;
use super::filter;
use crate::error::{BrowserinoError, Result};
use crate::store::PreferenceStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Snapshot the exportable part of the store
pub fn build_export_document<S: PreferenceStore>(store: &S) -> SettingsDocument {
    let settings = filter::exportable_preferences(store);
    log::debug!(
        "Export includes {} key(s): {:?}",
        settings.len(),
        settings.keys().collect::<Vec<_>>()
    );
    SettingsDocument::new(settings)
}

/// Filter and encode the store's settings
pub fn export_settings<S: PreferenceStore>(store: &S) -> Result<Vec<u8>> {
    build_export_document(store).encode()
}

/// Write an encoded document to `path`
///
/// The bytes land in a temporary file beside the target which is then renamed over it,
/// so a failed write never leaves a truncated settings file behind.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let picker_failure =
        |e: std::io::Error| BrowserinoError::PickerFailure(format!("{}: {}", path.display(), e));

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(picker_failure)?;
    temp_file.write_all(bytes).map_err(picker_failure)?;
    temp_file.flush().map_err(picker_failure)?;
    temp_file
        .persist(path)
        .map_err(|e| picker_failure(e.error))?;

    Ok(path.to_path_buf())
}

/// Export the store's settings to a file, logging the outcome
pub fn export_settings_to_file<S: PreferenceStore>(store: &S, path: &Path) -> Result<PathBuf> {
    let document = build_export_document(store);
    let bytes = document.encode()?;

    match write_document(path, &bytes) {
        Ok(written) => {
            log::info!(
                "Settings exported to: {} ({} key(s))",
                written.display(),
                document.len()
            );
            Ok(written)
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            Err(e)
        }
    }
}
