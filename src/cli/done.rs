//! ticklist done command implementation
//!
//! Toggles one task between completed and pending.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::TaskStore;

#[derive(serde::Serialize)]
struct DoneReport {
    id: u64,
    found: bool,
    completed: Option<bool>,
}

pub fn run(id: u64, data_dir: PathBuf, json: bool, quiet: bool) -> Result<()> {
    let storage = Storage::open(&data_dir)?;
    let mut store = TaskStore::open(storage);

    let completed = store.toggle_complete(id)?;

    let header = match completed {
        Some(true) => format!("Task {id} completed"),
        Some(false) => format!("Task {id} marked incomplete"),
        None => format!("No task with id {id}"),
    };
    let report = DoneReport {
        id,
        found: completed.is_some(),
        completed,
    };

    let human = HumanOutput::new(header);
    emit_success(OutputOptions { json, quiet }, "done", &report, Some(&human))?;

    Ok(())
}
