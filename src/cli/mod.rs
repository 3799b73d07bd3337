//! CLI entry point and wiring
//!
//! Resolves the operating mode once, builds the adapters, and dispatches to
//! the command handlers.

mod app;
mod commands;

use clap::Parser;

use credgate::adapters::{FileStore, HttpApi};
use credgate::config::{GlobalConfig, Mode};
use credgate::core::services::Remote;
use credgate::output::OutputMode;
use credgate::store::LocalStore;

use app::{Cli, Command};

/// Parse arguments and run the selected command
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = if cli.json { OutputMode::Json } else { OutputMode::Human };

    let config = GlobalConfig::load();
    let mode = Mode::resolve(&config);

    // The transport exists exactly when a backend is configured
    let api = match &mode {
        Mode::Backend { endpoint } => Some(HttpApi::new(endpoint)),
        Mode::Demo => None,
    };
    let remote = match (&mode, &api) {
        (Mode::Backend { endpoint }, Some(api)) => Remote::Backend {
            endpoint: endpoint.as_str(),
            api,
        },
        _ => Remote::Demo,
    };

    let file_store = FileStore::at_default_location();
    let store = LocalStore::new(&file_store);

    match cli.command {
        Command::Verify { url, comment } => {
            commands::verify::run(&remote, &store, &url, comment.as_deref(), output)
        },
        Command::Post {
            verification_id,
            mode,
        } => commands::post::run(&remote, &store, &verification_id, &mode, output),
        Command::Feed => commands::feed::run(&remote, &store, output),
        Command::Report { verification_id } => {
            commands::report::run(&remote, &store, &verification_id, output)
        },
        Command::Reset => commands::reset::run(&remote, &store),
        Command::Config { endpoint, clear } => commands::config_cmd::run(endpoint, clear),
    }
}
