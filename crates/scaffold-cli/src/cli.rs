use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Notes store and TCP demo feed from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the notes database (overrides SCAFFOLD_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all notes, oldest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store a new note
    #[command(alias = "new")]
    Add {
        /// Note text
        text: Vec<String>,
    },
    /// Run the placeholder sync
    Sync {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the TCP demo listener and print push messages until Ctrl-C
    Listen,
    /// Print the resolved configuration
    Config,
}
