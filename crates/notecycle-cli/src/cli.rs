use clap::{Args, Parser, Subcommand, ValueEnum};
use notecycle_core::BackendKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notecycle")]
#[command(about = "Cycle through items and keep timestamped notes on each", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the data file (or set NOTECYCLE_FILE env var).
    /// With the key-value backend this is the key-value file.
    #[arg(long, global = true, value_name = "FILE", env = "NOTECYCLE_FILE")]
    pub file: Option<PathBuf>,

    /// Storage backend (or set NOTECYCLE_BACKEND env var)
    #[arg(long, global = true, value_enum, env = "NOTECYCLE_BACKEND")]
    pub backend: Option<BackendArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BackendArg {
    File,
    KeyValue,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::File => BackendKind::File,
            BackendArg::KeyValue => BackendKind::KeyValue,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all items and the active one
    Show,
    /// Make the next item active
    Next,
    /// Make the previous item active
    Prev,
    /// Item operations
    Item(ItemCommand),
    /// Note operations on the active item
    Note(NoteCommand),
    /// Export everything as JSON
    Export(ExportArgs),
    /// Replace everything with exported JSON
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Item commands
#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub action: ItemAction,
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Append a new item
    Add {
        #[arg(long)]
        title: String,
    },
    /// List items in order
    List,
    /// Rename an item
    Edit {
        #[arg(long)]
        index: usize,
        #[arg(long)]
        title: String,
    },
    /// Remove an item and its notes
    Remove {
        #[arg(long)]
        index: usize,
    },
    /// Move an item to another slot (slot may equal the item count)
    Move {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
}

// Note commands
#[derive(Args)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note to the active item
    Add {
        #[arg(long)]
        text: String,
    },
    /// List notes of the active item, newest first
    List,
    /// Delete a note of the active item by position
    Delete {
        #[arg(long)]
        index: usize,
    },
}

// Export/Import commands
#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Read from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
}
