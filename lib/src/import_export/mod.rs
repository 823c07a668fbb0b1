pub mod document;
pub mod export;
pub mod filter;
pub mod import;

// Re-export main functions for convenience
pub use document::SettingsDocument;
pub use export::{build_export_document, export_settings, export_settings_to_file, write_document};
pub use filter::{excluded_keys, exportable_preferences, is_exportable, EXCLUSION_RULES};
pub use import::{
    import_settings, import_settings_from_bytes, import_settings_from_file, read_document,
};
