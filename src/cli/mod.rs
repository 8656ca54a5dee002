//! Command-line interface for ticklist
//!
//! The clap derive surface lives here; each subcommand keeps its
//! arguments and run function in its own submodule.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

mod add;
mod done;
mod export;
mod list;
mod rm;
mod stats;
mod ui;

/// ticklist - a task list for the terminal
///
/// Keeps one ordered task list in a JSON store, with an interactive TUI
/// for everyday use and one-shot subcommands for scripting.
#[derive(Parser, Debug)]
#[command(name = "ticklist")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the task store (defaults to the platform data dir)
    #[arg(long, global = true, env = "TICKLIST_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "TICKLIST_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the list
    Add {
        /// Task text (at most 150 characters after trimming)
        text: String,
    },

    /// List tasks in creation order
    List,

    /// Toggle a task's completion state
    Done {
        /// Task id
        id: u64,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Export the list to a date-stamped JSON file
    Export {
        /// Directory to write the export into
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },

    /// Show task counters
    Stats,

    /// Run the interactive TUI (the default when no subcommand is given)
    Ui,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let config = Config::load_or_default(self.config.as_ref())?;
        let data_dir = config.resolve_data_dir(self.data_dir.as_ref())?;

        match self.command {
            None | Some(Commands::Ui) => ui::run(ui::UiOptions {
                data_dir,
                export_dir: config.resolve_export_dir(None),
                json: self.json,
                quiet: self.quiet,
            }),
            Some(Commands::Add { text }) => add::run(text, data_dir, self.json, self.quiet),
            Some(Commands::List) => list::run(data_dir, self.json, self.quiet),
            Some(Commands::Done { id }) => done::run(id, data_dir, self.json, self.quiet),
            Some(Commands::Rm { id, yes }) => rm::run(rm::RmOptions {
                id,
                yes,
                data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Some(Commands::Export { out }) => export::run(export::ExportOptions {
                data_dir,
                out_dir: config.resolve_export_dir(out.as_ref()),
                json: self.json,
                quiet: self.quiet,
            }),
            Some(Commands::Stats) => stats::run(data_dir, self.json, self.quiet),
        }
    }
}
