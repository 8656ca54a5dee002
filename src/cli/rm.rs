//! ticklist rm command implementation
//!
//! Deletes one task after an interactive confirmation. Deleting an id that
//! does not exist is a no-op, not an error.

use std::path::PathBuf;

use crate::actions::preview;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::TaskStore;

/// Options for the rm command
pub struct RmOptions {
    pub id: u64,
    pub yes: bool,
    pub data_dir: PathBuf,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct RmReport {
    id: u64,
    found: bool,
    deleted: bool,
}

pub fn run(options: RmOptions) -> Result<()> {
    let storage = Storage::open(&options.data_dir)?;
    let mut store = TaskStore::open(storage);
    let output = OutputOptions {
        json: options.json,
        quiet: options.quiet,
    };

    let text = match store.get(options.id) {
        Some(task) => task.text.clone(),
        None => {
            let report = RmReport {
                id: options.id,
                found: false,
                deleted: false,
            };
            let human = HumanOutput::new(format!("No task with id {}", options.id));
            emit_success(output, "rm", &report, Some(&human))?;
            return Ok(());
        }
    };

    if !options.yes && !confirm_delete(options.id, &text)? {
        let report = RmReport {
            id: options.id,
            found: true,
            deleted: false,
        };
        let human = HumanOutput::new(format!("Kept task {}", options.id));
        emit_success(output, "rm", &report, Some(&human))?;
        return Ok(());
    }

    store.remove(options.id)?;

    let report = RmReport {
        id: options.id,
        found: true,
        deleted: true,
    };
    let human = HumanOutput::new(format!("Deleted task {}", options.id));
    emit_success(output, "rm", &report, Some(&human))?;

    Ok(())
}

// Prompt on stderr so --json stdout stays machine-readable. EOF counts
// as "no".
fn confirm_delete(id: u64, text: &str) -> Result<bool> {
    eprint!("Delete task {id} \"{}\"? [y/N] ", preview(text));
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
