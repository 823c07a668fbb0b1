use super::{AppContext, PrefsCommand};
use crate::output::colorize::{Colorize, ColorizeGeneral};
use browserino::error::{BrowserinoError, Result};
use browserino::general::{self, GeneralPreferences, Toggle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCommand;

impl PrefsCommand for GeneralCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let prefs = GeneralPreferences::load(ctx.store)?;
        print!("{}", ColorizeGeneral(&prefs).render(ctx.no_color));
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCommand {
    pub name: String,
    pub state: String,
}

/// Parse an on/off argument
pub fn parse_state(state: &str) -> Option<bool> {
    match state.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl PrefsCommand for ToggleCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let toggle = Toggle::from_string(&self.name).ok_or_else(|| {
            BrowserinoError::InvalidInput(format!(
                "unknown toggle '{}' (expected close-after-copy or alternative-shortcut)",
                self.name
            ))
        })?;
        let enabled = parse_state(&self.state).ok_or_else(|| {
            BrowserinoError::InvalidInput(format!("expected on or off, got '{}'", self.state))
        })?;

        general::set_toggle(ctx.store, toggle, enabled)?;
        eprintln!(
            "{}: {}",
            toggle.description(),
            if enabled { "on" } else { "off" }
        );
        Ok(())
    }
}
