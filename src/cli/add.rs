//! ticklist add command implementation
//!
//! Validates and appends one task, then persists the list.

use std::path::PathBuf;

use crate::actions::preview;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::TaskStore;

pub fn run(text: String, data_dir: PathBuf, json: bool, quiet: bool) -> Result<()> {
    let storage = Storage::open(&data_dir)?;
    let mut store = TaskStore::open(storage);

    let task = store.add(&text)?;

    let mut human = HumanOutput::new(format!("Added task {}: \"{}\"", task.id, preview(&task.text)));
    human.push_summary("id", task.id.to_string());
    human.push_summary("created", task.created_at.clone());

    emit_success(OutputOptions { json, quiet }, "add", &task, Some(&human))?;

    Ok(())
}
