//! Gesture-to-store action layer shared by the TUI and the CLI.
//!
//! Translates raw user input into task store calls plus a user-facing
//! outcome. Validation failures surface as `Err` before anything mutates;
//! a failed write-back comes back as an outcome instead, because the
//! in-memory mutation stands and callers must keep rendering it.

use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::export;
use crate::notify::NoticeKind;
use crate::task::TaskStore;

/// Longest preview of task text quoted in notifications, in characters
pub const PREVIEW_LEN: usize = 30;

/// Celebration variants for completing a task
const COMPLETION_MESSAGES: [&str; 5] = [
    "Task complete, nice work!",
    "Done and dusted!",
    "Another one ticked off!",
    "That one is history!",
    "Checked off, keep going!",
];

/// What a gesture produced, for re-rendering and messaging
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub changed: bool,
    pub message: String,
    pub kind: NoticeKind,
    pub task_id: Option<u64>,
}

/// First `PREVIEW_LEN` characters of `text`, with nothing appended
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_LEN).collect()
}

/// One of the fixed celebration variants, picked pseudo-randomly
pub fn completion_message() -> &'static str {
    COMPLETION_MESSAGES[rand::random::<usize>() % COMPLETION_MESSAGES.len()]
}

/// Handle an add gesture with raw input from a text field or argv
pub fn submit_text(store: &mut TaskStore, raw: &str) -> Result<ActionOutcome> {
    match store.add(raw) {
        Ok(task) => Ok(ActionOutcome {
            changed: true,
            message: format!("Added \"{}\"", preview(&task.text)),
            kind: NoticeKind::Success,
            task_id: Some(task.id),
        }),
        Err(err @ (Error::EmptyText | Error::TextTooLong { .. })) => Err(err),
        Err(err) => {
            warn!("add saved to memory only: {err}");
            Ok(ActionOutcome {
                changed: true,
                message: format!("Task added, but saving failed: {err}"),
                kind: NoticeKind::Error,
                task_id: store.tasks().last().map(|task| task.id),
            })
        }
    }
}

/// Handle a toggle gesture for `id`
///
/// Completing a task earns a celebration variant; unticking gets a
/// neutral note. Unknown ids are a no-op.
pub fn toggle_task(store: &mut TaskStore, id: u64) -> Result<ActionOutcome> {
    match store.toggle_complete(id) {
        Ok(Some(true)) => Ok(ActionOutcome {
            changed: true,
            message: completion_message().to_string(),
            kind: NoticeKind::Success,
            task_id: Some(id),
        }),
        Ok(Some(false)) => Ok(ActionOutcome {
            changed: true,
            message: "Marked incomplete".to_string(),
            kind: NoticeKind::Info,
            task_id: Some(id),
        }),
        Ok(None) => Ok(ActionOutcome {
            changed: false,
            message: format!("No task with id {id}"),
            kind: NoticeKind::Info,
            task_id: None,
        }),
        Err(err) => {
            warn!(id, "toggle saved to memory only: {err}");
            Ok(ActionOutcome {
                changed: true,
                message: format!("Change not saved: {err}"),
                kind: NoticeKind::Error,
                task_id: Some(id),
            })
        }
    }
}

/// Handle a delete gesture for `id`; confirming intent is the caller's job
pub fn remove_task(store: &mut TaskStore, id: u64) -> Result<ActionOutcome> {
    match store.remove(id) {
        Ok(true) => Ok(ActionOutcome {
            changed: true,
            message: format!("Deleted task {id}"),
            kind: NoticeKind::Success,
            task_id: Some(id),
        }),
        Ok(false) => Ok(ActionOutcome {
            changed: false,
            message: format!("No task with id {id}"),
            kind: NoticeKind::Info,
            task_id: None,
        }),
        Err(err) => {
            warn!(id, "delete saved to memory only: {err}");
            Ok(ActionOutcome {
                changed: true,
                message: format!("Deleted, but saving failed: {err}"),
                kind: NoticeKind::Error,
                task_id: None,
            })
        }
    }
}

/// Handle an export gesture over the current list
///
/// Export never mutates task state; both the empty-list refusal and
/// write failures bubble up for the caller to notify.
pub fn export_tasks(store: &TaskStore, dir: &Path) -> Result<ActionOutcome> {
    let path = export::export(store.tasks(), dir)?;
    let count = store.tasks().len();
    let noun = if count == 1 { "task" } else { "tasks" };

    Ok(ActionOutcome {
        changed: false,
        message: format!("Exported {count} {noun} to {}", path.display()),
        kind: NoticeKind::Success,
        task_id: None,
    })
}
