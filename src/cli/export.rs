//! ticklist export command implementation
//!
//! Writes the full list to a date-stamped JSON file. An empty list is
//! refused before anything touches the filesystem.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::TaskStore;

/// Options for the export command
pub struct ExportOptions {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ExportReport {
    path: PathBuf,
    tasks: usize,
    mime: &'static str,
}

pub fn run(options: ExportOptions) -> Result<()> {
    let storage = Storage::open(&options.data_dir)?;
    let store = TaskStore::open(storage);

    let path = crate::export::export(store.tasks(), &options.out_dir)?;
    let count = store.tasks().len();

    let report = ExportReport {
        path: path.clone(),
        tasks: count,
        mime: crate::export::EXPORT_MIME,
    };

    let noun = if count == 1 { "task" } else { "tasks" };
    let mut human = HumanOutput::new(format!(
        "Exported {count} {noun} to {}",
        path.display()
    ));
    human.push_summary("file", path.display().to_string());
    human.push_summary("mime", crate::export::EXPORT_MIME);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "export",
        &report,
        Some(&human),
    )?;

    Ok(())
}
