use browserino::browser::HandlerRegistry;
use browserino::config::Config;
use browserino::error::Result;
use browserino::store::SqliteStore;

pub struct AppContext<'a> {
    pub store: &'a SqliteStore,
    pub registry: &'a dyn HandlerRegistry,
    pub config: &'a Config,
    pub no_color: bool,
}

pub mod default_browser;
pub mod general;
pub mod import_export;
pub mod prefs;

pub trait PrefsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn PrefsCommand>)
pub enum CommandEnum {
    Export(import_export::ExportCommand),
    Import(import_export::ImportCommand),
    Reset(prefs::ResetCommand),
    List(prefs::ListCommand),
    Get(prefs::GetCommand),
    Set(prefs::SetCommand),
    Unset(prefs::UnsetCommand),
    General(general::GeneralCommand),
    Toggle(general::ToggleCommand),
    DefaultBrowser(default_browser::DefaultBrowserCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx),
            Self::Reset(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Get(cmd) => cmd.execute(ctx),
            Self::Set(cmd) => cmd.execute(ctx),
            Self::Unset(cmd) => cmd.execute(ctx),
            Self::General(cmd) => cmd.execute(ctx),
            Self::Toggle(cmd) => cmd.execute(ctx),
            Self::DefaultBrowser(cmd) => cmd.execute(ctx),
        }
    }
}
