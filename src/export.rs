//! Export snapshots for ticklist.
//!
//! Writes the current list as a standalone pretty-printed JSON document
//! named `tasks-YYYY-MM-DD.json`, the same wire shape the store uses.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{Error, Result};
use crate::storage::write_atomic;
use crate::task::Task;

/// Media type of the exported document
pub const EXPORT_MIME: &str = "application/json";

/// File name for an export taken on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("tasks-{}.json", date.format("%Y-%m-%d"))
}

/// Write a snapshot of `tasks` into `dir`, returning the written path
///
/// An empty list is refused before anything touches the filesystem; no
/// file appears on any failure path. Task state is never mutated here.
pub fn export(tasks: &[Task], dir: &Path) -> Result<PathBuf> {
    if tasks.is_empty() {
        return Err(Error::NothingToExport);
    }

    let path = dir.join(export_file_name(Local::now().date_naive()));
    let json = serde_json::to_string_pretty(tasks)?;
    write_atomic(&path, json.as_bytes())?;

    info!(path = %path.display(), count = tasks.len(), "exported task list");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: "2026-08-25 09:00:00".to_string(),
        }
    }

    #[test]
    fn file_name_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(export_file_name(date), "tasks-2026-08-25.json");

        // Single-digit months and days stay zero-padded
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(export_file_name(date), "tasks-2026-01-05.json");
    }

    #[test]
    fn empty_list_is_refused_without_a_file() {
        let temp = tempdir().unwrap();

        let result = export(&[], temp.path());
        assert!(matches!(result, Err(Error::NothingToExport)));

        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 0);
    }

    #[test]
    fn export_round_trips_every_field() {
        let temp = tempdir().unwrap();
        let tasks = vec![task(1, "Buy milk", false), task(2, "Walk the dog", true)];

        let path = export(&tasks, temp.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            export_file_name(Local::now().date_naive())
        );

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Task> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, tasks);
    }

    #[test]
    fn export_is_pretty_printed() {
        let temp = tempdir().unwrap();
        let tasks = vec![task(1, "Buy milk", false)];

        let path = export(&tasks, temp.path()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        // Pretty output is multi-line with indented fields
        assert!(raw.lines().count() > 1);
        assert!(raw.contains("  \"id\": 1"));
        assert!(raw.contains("\"createdAt\""));
    }

    #[test]
    fn export_creates_missing_directory() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("exports").join("deep");

        let tasks = vec![task(1, "Buy milk", false)];
        let path = export(&tasks, &out).unwrap();
        assert!(path.exists());
    }
}
