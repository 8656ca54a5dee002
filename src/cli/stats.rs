//! ticklist stats command implementation
//!
//! Prints the derived counters without touching the list.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::TaskStore;

pub fn run(data_dir: PathBuf, json: bool, quiet: bool) -> Result<()> {
    let storage = Storage::open(&data_dir)?;
    let store = TaskStore::open(storage);

    let stats = store.stats();

    let mut human = HumanOutput::new(format!(
        "Tasks: {} total, {} completed, {} pending",
        stats.total, stats.completed, stats.pending
    ));
    human.push_summary("total", stats.total.to_string());
    human.push_summary("completed", stats.completed.to_string());
    human.push_summary("pending", stats.pending.to_string());

    emit_success(OutputOptions { json, quiet }, "stats", &stats, Some(&human))?;

    Ok(())
}
