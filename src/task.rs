//! Task list management for ticklist.
//!
//! One in-memory ordered list of tasks, mirrored to the keyed store under
//! the `tasks` key after every mutation. `TaskStore` is the only code that
//! mutates the list; collaborators hold it explicitly.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::storage::{Storage, TASKS_KEY};

/// Longest accepted task text, in characters (inclusive)
pub const MAX_TEXT_LEN: usize = 150;

/// Creation timestamp format, human-readable and fixed at creation
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single to-do item
///
/// Wire shape, identical in storage and export:
/// `{id, text, completed, createdAt}`. Only `completed` is ever mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// Counter summary derived from the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Validate raw task text, returning the trimmed form
///
/// Leading/trailing whitespace never counts: text that is empty after
/// trimming is rejected, and length is measured in characters on the
/// trimmed form.
pub fn validate_text(raw: &str) -> Result<&str> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }

    let length = text.chars().count();
    if length > MAX_TEXT_LEN {
        return Err(Error::TextTooLong {
            length,
            limit: MAX_TEXT_LEN,
        });
    }

    Ok(text)
}

/// Owner of the in-memory task list
///
/// Loaded once at startup and written back through the keyed store after
/// every add/remove/toggle. Ids come from a monotonic counter resumed one
/// past the highest persisted id, so they stay unique and increasing for
/// the lifetime of the list.
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Load the persisted list, or start empty
    ///
    /// An absent key means a fresh list. A stored value that cannot be
    /// read or parsed is discarded with a log line rather than surfaced:
    /// the session starts empty and the next successful save replaces the
    /// corrupt file.
    pub fn open(storage: Storage) -> Self {
        let tasks: Vec<Task> = match storage.read_json(TASKS_KEY) {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("discarding unreadable task list: {err}");
                Vec::new()
            }
        };

        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1);
        debug!(count = tasks.len(), next_id, "task store opened");

        Self {
            storage,
            tasks,
            next_id,
        }
    }

    /// Append a new task built from `text` and persist
    ///
    /// Validation failures leave the list untouched. A failed write-back
    /// surfaces as an error but does NOT roll the append back; the session
    /// keeps the task in memory and stays unsynced until the next
    /// successful save.
    pub fn add(&mut self, text: &str) -> Result<Task> {
        let text = validate_text(text)?;

        let task = Task {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());

        self.persist()?;
        Ok(task)
    }

    /// Remove the task with `id` and persist
    ///
    /// Absent ids are a no-op (`Ok(false)`) and nothing is written.
    /// Survivors keep their insertion order.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let Some(idx) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(false);
        };

        self.tasks.remove(idx);
        self.persist()?;
        Ok(true)
    }

    /// Flip `completed` on the task with `id` and persist
    ///
    /// Returns the resulting state so callers can pick a message for the
    /// new state, or `None` (nothing written) when the id is absent.
    pub fn toggle_complete(&mut self, id: u64) -> Result<Option<bool>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        task.completed = !task.completed;
        let state = task.completed;

        self.persist()?;
        Ok(Some(state))
    }

    /// The current list, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up one task by id
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Counter summary for the current list
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();

        Stats {
            total,
            completed,
            pending: total - completed,
        }
    }

    fn persist(&self) -> Result<()> {
        self.storage.write_json(TASKS_KEY, &self.tasks)
    }
}
