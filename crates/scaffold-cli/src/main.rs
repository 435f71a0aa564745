//! Scaffold CLI - the notes store and TCP demo feed without the window
//!
//! Every command goes through the same boundary the desktop app uses.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use scaffold_core::boundary;
use scaffold_core::{AppConfig, NoteStore, NotesService};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_add, run_config, run_list, run_listen, run_sync};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scaffold=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.data_dir)?;

    if matches!(cli.command, Commands::Config) {
        return run_config(&config);
    }

    let service = NotesService::new(NoteStore::new(config.db_path()));
    let (backend, handle) = boundary::connect(service, config.tcp.clone());
    let backend = if matches!(cli.command, Commands::Listen) {
        backend
    } else {
        backend.without_tcp_demo()
    };
    let backend_task = backend.spawn();

    let result = match cli.command {
        Commands::List { json } => run_list(&handle, json).await,
        Commands::Add { text } => run_add(&handle, &text).await,
        Commands::Sync { json } => run_sync(&handle, json).await,
        Commands::Listen => run_listen(&handle).await,
        Commands::Config => Ok(()),
    };

    drop(handle);
    backend_task.abort();
    result
}

fn resolve_config(data_dir: Option<std::path::PathBuf>) -> Result<AppConfig, CliError> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    tracing::debug!("Using database at {}", config.db_path().display());
    Ok(config)
}
