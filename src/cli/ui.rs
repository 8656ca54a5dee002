//! ticklist ui command implementation
//!
//! Launches the interactive TUI on the resolved task store.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::TaskStore;

/// Options for the ui command
pub struct UiOptions {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: UiOptions) -> Result<()> {
    if options.json || options.quiet {
        return Err(Error::InvalidArgument(
            "the TUI does not support --json or --quiet".to_string(),
        ));
    }

    let storage = Storage::open(&options.data_dir)?;
    let store = TaskStore::open(storage);

    crate::ui::task_list::run(store, options.export_dir)
}
