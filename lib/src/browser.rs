//! Default-browser detection
//!
//! Browserino is the default browser when the application registered for `https` URLs is
//! Browserino itself. Registration is handled by the OS; [`HandlerRegistry`] is the seam
//! that talks to it.

use crate::error::{BrowserinoError, Result};

/// Scheme probed to find the current default browser
pub const PROBE_SCHEME: &str = "https";

/// Scheme Browserino registers itself for when made default
pub const REGISTER_SCHEME: &str = "http";

/// Access to the OS URL-scheme handler registrations
pub trait HandlerRegistry {
    /// Identifier of the application handling `scheme`, or `None` if there is none
    fn handler_for_scheme(&self, scheme: &str) -> Result<Option<String>>;

    /// Ask the OS to make `app_id` the handler for `scheme`
    fn set_default_handler(&self, scheme: &str, app_id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultStatus {
    Default,
    NotDefault,
    /// No handler is registered for the probe scheme
    Unknown,
}

impl DefaultStatus {
    pub fn is_default(&self) -> bool {
        matches!(self, DefaultStatus::Default)
    }

    pub fn display_name(&self) -> &str {
        match self {
            DefaultStatus::Default => "default browser",
            DefaultStatus::NotDefault => "not the default browser",
            DefaultStatus::Unknown => "unknown (no handler registered)",
        }
    }
}

/// Identifier of the current default browser
pub fn default_browser<R: HandlerRegistry + ?Sized>(registry: &R) -> Result<Option<String>> {
    registry.handler_for_scheme(PROBE_SCHEME)
}

/// Compare the current default browser with `own_id`
pub fn default_browser_status<R: HandlerRegistry + ?Sized>(
    registry: &R,
    own_id: &str,
) -> Result<DefaultStatus> {
    let status = match default_browser(registry)? {
        Some(handler) if handler == own_id => DefaultStatus::Default,
        Some(handler) => {
            log::debug!("Default browser is {}, not {}", handler, own_id);
            DefaultStatus::NotDefault
        }
        None => DefaultStatus::Unknown,
    };
    Ok(status)
}

/// Register `own_id` as the handler and report the resulting status
///
/// The status is re-read whether or not registration succeeded; a registration error
/// is only logged.
pub fn make_default<R: HandlerRegistry + ?Sized>(registry: &R, own_id: &str) -> Result<DefaultStatus> {
    if let Err(e) = registry.set_default_handler(REGISTER_SCHEME, own_id) {
        log::warn!("Registering {} for {} failed: {}", own_id, REGISTER_SCHEME, e);
    }
    default_browser_status(registry, own_id)
}

/// The running system's handler registry
///
/// On Linux this asks `xdg-settings`, where application identifiers are desktop entry
/// names such as `firefox.desktop`. Other platforms report no handler.
#[derive(Debug, Default)]
pub struct SystemRegistry;

impl SystemRegistry {
    #[cfg(target_os = "linux")]
    fn xdg_settings(args: &[&str]) -> Result<String> {
        let output = std::process::Command::new("xdg-settings")
            .args(args)
            .output()
            .map_err(|e| BrowserinoError::Handler(format!("failed to run xdg-settings: {}", e)))?;

        if !output.status.success() {
            return Err(BrowserinoError::Handler(format!(
                "xdg-settings {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl HandlerRegistry for SystemRegistry {
    #[cfg(target_os = "linux")]
    fn handler_for_scheme(&self, scheme: &str) -> Result<Option<String>> {
        let handler = Self::xdg_settings(&["get", "default-url-scheme-handler", scheme])?;
        Ok(Some(handler).filter(|h| !h.is_empty()))
    }

    #[cfg(not(target_os = "linux"))]
    fn handler_for_scheme(&self, scheme: &str) -> Result<Option<String>> {
        log::debug!("No handler registry available for {}", scheme);
        Ok(None)
    }

    #[cfg(target_os = "linux")]
    fn set_default_handler(&self, scheme: &str, app_id: &str) -> Result<()> {
        Self::xdg_settings(&["set", "default-url-scheme-handler", scheme, app_id])?;
        // Also claim the web-browser role so both http and https follow
        if let Err(e) = Self::xdg_settings(&["set", "default-web-browser", app_id]) {
            log::warn!("Could not set default-web-browser: {}", e);
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn set_default_handler(&self, scheme: &str, app_id: &str) -> Result<()> {
        Err(BrowserinoError::Handler(format!(
            "cannot register {} for {}: unsupported platform",
            app_id, scheme
        )))
    }
}
