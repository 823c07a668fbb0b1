use super::{AppContext, PrefsCommand};
use crate::output::colorize::{status_line, Status};
use browserino::browser::{self, DefaultStatus};
use browserino::error::{BrowserinoError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultBrowserCommand {
    pub make: bool,
}

impl DefaultBrowserCommand {
    fn status(&self, ctx: &AppContext) -> Result<DefaultStatus> {
        let own_id = &ctx.config.bundle_id;
        if self.make {
            browser::make_default(ctx.registry, own_id)
        } else {
            browser::default_browser_status(ctx.registry, own_id)
        }
    }
}

impl PrefsCommand for DefaultBrowserCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let status = self.status(ctx)?;
        let kind = match status {
            DefaultStatus::Default => Status::Success,
            DefaultStatus::NotDefault => Status::Failure,
            DefaultStatus::Unknown => Status::Warning,
        };
        println!(
            "{}",
            status_line(
                kind,
                &format!("Browserino is {}", status.display_name()),
                ctx.no_color
            )
        );
        if self.make && !status.is_default() {
            return Err(BrowserinoError::Handler(format!(
                "could not register {} as the default browser",
                ctx.config.bundle_id
            )));
        }
        if !status.is_default() {
            if let Ok(Some(handler)) = browser::default_browser(ctx.registry) {
                println!("Current default: {}", handler);
            }
        }
        Ok(())
    }
}
