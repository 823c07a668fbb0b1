use super::{AppContext, PrefsCommand};
use crate::cli::get_exe_name;
use crate::output::colorize::{status_line, Status};
use browserino::error::{BrowserinoError, Result};
use browserino::import_export;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportCommand {
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl PrefsCommand for ExportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if self.stdout {
            let bytes = import_export::export_settings(ctx.store)?;
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes)?;
            writeln!(out)?;
            return Ok(());
        }

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&ctx.config.export_filename));

        match import_export::export_settings_to_file(ctx.store, &path) {
            Ok(written) => {
                eprintln!(
                    "{}",
                    status_line(
                        Status::Success,
                        &format!("Settings exported to: {}", written.display()),
                        ctx.no_color
                    )
                );
                Ok(())
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    status_line(Status::Failure, &format!("Export failed: {}", e), ctx.no_color)
                );
                Err(e)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCommand {
    pub file: Option<PathBuf>,
}

impl PrefsCommand for ImportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match import_export::import_settings_from_file(ctx.store, self.file.as_deref()) {
            Ok(count) => {
                eprintln!(
                    "{}",
                    status_line(
                        Status::Success,
                        &format!("Settings imported successfully ({} key(s))", count),
                        ctx.no_color
                    )
                );
                Ok(())
            }
            Err(BrowserinoError::PickerCancelled) => {
                eprintln!("No settings file given; nothing imported.");
                eprintln!("Usage: {} import <FILE>", get_exe_name());
                Ok(())
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    status_line(
                        Status::Failure,
                        &format!("Failed to import settings: {}", e),
                        ctx.no_color
                    )
                );
                Err(e)
            }
        }
    }
}
