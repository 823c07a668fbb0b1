use crate::commands::{
    default_browser::DefaultBrowserCommand,
    general::{GeneralCommand, ToggleCommand},
    import_export::{ExportCommand, ImportCommand},
    prefs::{GetCommand, ListCommand, ResetCommand, SetCommand, UnsetCommand},
    AppContext, CommandEnum,
};
use crate::format::OutputFormat;
use browserino::browser::HandlerRegistry;
use browserino::config::Config;
use browserino::error::Result;
use browserino::store::SqliteStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_exe_name() -> &'static str {
    static EXE_NAME: OnceLock<String> = OnceLock::new();
    EXE_NAME.get_or_init(|| {
        std::env::args()
            .next()
            .as_ref()
            .map(std::path::Path::new)
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "browserino".to_string())
    })
}

#[derive(Parser)]
#[command(author, version, about = "Browserino preferences", long_about = None)]
pub struct Cli {
    /// Optional custom preference database path
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export all settings to a JSON file
    Export {
        /// Destination file (defaults to browserino-settings.json)
        file: Option<PathBuf>,

        /// Write the document to stdout instead of a file
        #[arg(long, conflicts_with = "file")]
        stdout: bool,
    },

    /// Import all settings from a JSON file
    Import {
        /// Settings file produced by export
        file: Option<PathBuf>,
    },

    /// Reset all preferences
    Reset {
        /// Confirm removing every preference
        #[arg(long)]
        yes: bool,
    },

    /// List preferences that an export would include
    List {
        /// List the keys an export leaves out instead
        #[arg(long)]
        excluded: bool,

        /// List every stored preference
        #[arg(long, conflicts_with = "excluded")]
        all: bool,

        /// Output format: json, yaml, toml (default: colored text)
        #[arg(short = 'f', long)]
        format: Option<String>,
    },

    /// Print one preference value
    Get {
        key: String,
    },

    /// Store one preference value (parsed as JSON, otherwise a string)
    Set {
        key: String,
        value: String,
    },

    /// Remove one preference
    Unset {
        key: String,
    },

    /// Show the General tab settings
    General,

    /// Turn a General tab toggle on or off
    Toggle {
        /// close-after-copy or alternative-shortcut
        name: String,

        /// on or off
        state: String,
    },

    /// Show whether Browserino is the default browser
    DefaultBrowser {
        /// Make Browserino the default browser first
        #[arg(long)]
        make: bool,
    },
}

impl Commands {
    pub fn into_command(self) -> CommandEnum {
        match self {
            Commands::Export { file, stdout } => CommandEnum::Export(ExportCommand { file, stdout }),
            Commands::Import { file } => CommandEnum::Import(ImportCommand { file }),
            Commands::Reset { yes } => CommandEnum::Reset(ResetCommand { yes }),
            Commands::List {
                excluded,
                all,
                format,
            } => CommandEnum::List(ListCommand {
                excluded,
                all,
                format: format
                    .as_deref()
                    .map(OutputFormat::from_string)
                    .unwrap_or(OutputFormat::Colored),
            }),
            Commands::Get { key } => CommandEnum::Get(GetCommand { key }),
            Commands::Set { key, value } => CommandEnum::Set(SetCommand { key, value }),
            Commands::Unset { key } => CommandEnum::Unset(UnsetCommand { key }),
            Commands::General => CommandEnum::General(GeneralCommand),
            Commands::Toggle { name, state } => CommandEnum::Toggle(ToggleCommand { name, state }),
            Commands::DefaultBrowser { make } => {
                CommandEnum::DefaultBrowser(DefaultBrowserCommand { make })
            }
        }
    }
}

pub fn handle_args(
    cli: Cli,
    store: &SqliteStore,
    registry: &dyn HandlerRegistry,
    config: &Config,
) -> Result<()> {
    let ctx = AppContext {
        store,
        registry,
        config,
        no_color: cli.nc,
    };
    cli.command.into_command().execute(&ctx)
}
