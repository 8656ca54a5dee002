//! Transient notifications for ticklist.
//!
//! Messages independent of task state: each notice carries a kind and an
//! expiry deadline, and the event loop prunes expired ones as it ticks.
//! Several notices may be visible at once; there is no queue and no dedup,
//! and nothing else in the system depends on notifier state.

use std::time::{Duration, Instant};

/// Default visible duration for a notice
pub const DEFAULT_NOTICE_MS: u64 = 3000;

/// Shorter duration for low-ceremony confirmations, e.g. deletes
pub const SHORT_NOTICE_MS: u64 = 1500;

/// Category of a notice, driving its styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// One transient message with its expiry deadline
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    /// Whether this notice should no longer be shown at `now`
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holder of the currently visible notices
#[derive(Debug, Default)]
pub struct Notifier {
    notices: Vec<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for the default duration
    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notify_for(message, kind, Duration::from_millis(DEFAULT_NOTICE_MS));
    }

    /// Show `message` for `duration`
    pub fn notify_for(&mut self, message: impl Into<String>, kind: NoticeKind, duration: Duration) {
        self.notices.push(Notice {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        });
    }

    /// Drop expired notices; true when anything was dropped
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| !notice.expired(now));
        self.notices.len() != before
    }

    /// Currently held notices, oldest first
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
