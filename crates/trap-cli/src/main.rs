mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trapmaster=warn,trap_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let store = args.store.as_deref();
    match args.command {
        Some(Command::Play { mode }) => commands::play::run(store, mode),
        Some(Command::Record { hits }) => commands::record::run(store, &hits),
        Some(Command::History { json }) => commands::history::run(store, json),
        Some(Command::Show { start_time }) => commands::show::run(store, &start_time),
        Some(Command::Export { output }) => commands::export::run(store, output.as_deref()),
        Some(Command::Import { file, yes }) => commands::import::run(store, &file, yes),
        Some(Command::Reset { yes }) => commands::reset::run(store, yes),
        Some(Command::CheckUri { uri }) => commands::check_uri::run(&uri),
        None => commands::history::run(store, false),
    }
}
