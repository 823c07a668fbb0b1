mod cli;
mod commands;
mod format;
mod output;

use browserino::browser::SystemRegistry;
use browserino::{config, store::SqliteStore};
use clap::Parser;

fn main() -> browserino::error::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; --debug applies unless RUST_LOG says otherwise
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    let store_path = args.store.clone().unwrap_or_else(|| cfg.store_path());
    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Using preference store {}", store_path.display());

    let store = SqliteStore::init(&store_path)?;
    let registry = SystemRegistry;

    cli::handle_args(args, &store, &registry, &cfg)?;

    Ok(())
}
