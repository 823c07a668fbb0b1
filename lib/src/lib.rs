pub mod browser;
pub mod config;
pub mod error;
pub mod general;
pub mod import_export;
pub mod models;
pub mod store;
pub mod utils;

// Re-export error types for convenience
pub use error::BrowserinoError;
