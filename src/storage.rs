//! Keyed storage layer for ticklist
//!
//! A small durable key-value store: each key maps to one JSON file under
//! the data directory. The task list lives under the fixed `tasks` key.
//!
//! # Directory Structure
//!
//! ```text
//! <data_dir>/
//!   tasks.json          # JSON array of tasks (the fixed key)
//!   tasks.json.lock     # cross-process write lock
//! ```
//!
//! Writes use the atomic pattern (temp file + rename) while holding an
//! exclusive flock on the sibling `.lock` file, so concurrent invocations
//! never interleave a read-modify-write and readers never see a partial
//! file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Fixed key the task list is persisted under
pub const TASKS_KEY: &str = "tasks";

/// Default lock timeout in milliseconds
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

/// Default retry interval when waiting for a lock
const LOCK_RETRY_INTERVAL_MS: u64 = 50;

/// Storage manager for ticklist state
#[derive(Debug, Clone)]
pub struct Storage {
    /// Directory holding one JSON file per key
    data_dir: PathBuf,
}

impl Storage {
    /// Open (creating if needed) the store rooted at `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the file backing `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Path to the lock file guarding `key`
    pub fn lock_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json.lock"))
    }

    // =========================================================================
    // Keyed I/O (atomic writes for safety)
    // =========================================================================

    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent. A value that fails to
    /// parse is an error; callers decide whether to surface or discard it.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let _lock = FileLock::acquire(self.lock_path(key), DEFAULT_LOCK_TIMEOUT_MS)?;
        let content = match fs::read_to_string(self.key_path(key)) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::Io(err)),
        };
        let value: T = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Write `value` under `key` (pretty-printed, atomic, locked)
    ///
    /// Concurrent readers see either the previous value or the new one,
    /// never a partial write.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;

        let _lock = FileLock::acquire(self.lock_path(key), DEFAULT_LOCK_TIMEOUT_MS)?;
        write_atomic(self.key_path(key), json.as_bytes())?;
        debug!(key, bytes = json.len(), "wrote storage key");
        Ok(())
    }
}

// =============================================================================
// File locking
// =============================================================================

/// Exclusive flock guard; released when dropped
pub struct FileLock {
    file: File,
}

impl FileLock {
    /// Take the exclusive lock at `path`, creating the file if needed
    ///
    /// Contention is retried until `timeout_ms` elapses, then reported as
    /// `LockFailed`.
    pub fn acquire(path: impl AsRef<Path>, timeout_ms: u64) -> Result<Self> {
        let path = path.as_ref();
        let file = open_lock_file(path)?;

        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(FileLock { file }),
                Err(err) if lock_contended(&err) => {
                    if Instant::now() >= deadline {
                        return Err(Error::LockFailed(path.to_path_buf()));
                    }
                    std::thread::sleep(Duration::from_millis(LOCK_RETRY_INTERVAL_MS));
                }
                Err(err) => return Err(Error::Io(err)),
            }
        }
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

fn open_lock_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    Ok(file)
}

fn lock_contended(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::WouldBlock {
        return true;
    }

    // fs2 surfaces Windows lock/sharing violations as raw OS errors 32/33
    // rather than WouldBlock.
    #[cfg(windows)]
    {
        matches!(err.raw_os_error(), Some(32) | Some(33))
    }
    #[cfg(not(windows))]
    {
        false
    }
}

// =============================================================================
// Atomic writes
// =============================================================================

/// Write `data` to `path` through a sibling temp file plus rename
///
/// Readers at `path` see either the old bytes or the new ones, never a
/// partial file. Takes no lock; `Storage::write_json` layers one on top.
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Same directory as the target, so the rename stays on one filesystem.
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

    let mut temp_file = File::create(&temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    fs::rename(&temp_path, path)?;
    Ok(())
}
