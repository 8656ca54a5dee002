//! ticklist list command implementation
//!
//! Prints the task list in creation order with the counter summary.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::{Stats, Task, TaskStore};
use crate::ui::task_list::model::{display_text, EMPTY_PLACEHOLDER};

#[derive(serde::Serialize)]
struct ListReport<'a> {
    tasks: &'a [Task],
    stats: Stats,
}

pub fn run(data_dir: PathBuf, json: bool, quiet: bool) -> Result<()> {
    let storage = Storage::open(&data_dir)?;
    let store = TaskStore::open(storage);

    let stats = store.stats();
    let report = ListReport {
        tasks: store.tasks(),
        stats,
    };

    let mut human = HumanOutput::new(format!(
        "Tasks: {} total, {} completed, {} pending",
        stats.total, stats.completed, stats.pending
    ));
    if store.tasks().is_empty() {
        human.push_detail(EMPTY_PLACEHOLDER);
    } else {
        for task in store.tasks() {
            human.push_detail(format_row(task));
        }
    }

    emit_success(OutputOptions { json, quiet }, "list", &report, Some(&human))?;

    Ok(())
}

fn format_row(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!(
        "[{mark}] {}  {}  ({})",
        task.id,
        display_text(&task.text),
        task.created_at
    )
}
