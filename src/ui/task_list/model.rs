use std::time::{Duration, Instant};

use crate::task::{Stats, Task};

/// Shown instead of the list while no tasks exist
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Add one above to get started!";

const PULSE_CONTRACT_MS: u64 = 150;
const PULSE_EXPAND_MS: u64 = 300;

/// One list row, safe to paint as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub completed: bool,
    pub text: String,
    pub created_at: String,
}

pub fn task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            completed: task.completed,
            text: display_text(&task.text),
            created_at: task.created_at.clone(),
        })
        .collect()
}

/// Replace control characters so task text cannot feed escape sequences
/// or line breaks into the terminal
pub fn display_text(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { '\u{FFFD}' } else { ch })
        .collect()
}

/// Animation phase of one counter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    Idle,
    Contract,
    Expand,
}

/// One stats counter with its pulse state
#[derive(Debug, Clone)]
pub struct CounterCell {
    pub label: &'static str,
    pub value: String,
    pulse_started: Option<Instant>,
}

impl CounterCell {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            pulse_started: None,
        }
    }

    /// Adopt a fresh rendered value, pulsing only when the text changed
    fn update(&mut self, value: String, now: Instant) {
        if value != self.value {
            self.value = value;
            self.pulse_started = Some(now);
        }
    }

    pub fn phase(&self, now: Instant) -> PulsePhase {
        let Some(start) = self.pulse_started else {
            return PulsePhase::Idle;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < Duration::from_millis(PULSE_CONTRACT_MS) {
            PulsePhase::Contract
        } else if elapsed < Duration::from_millis(PULSE_CONTRACT_MS + PULSE_EXPAND_MS) {
            PulsePhase::Expand
        } else {
            PulsePhase::Idle
        }
    }

    pub fn pulsing(&self, now: Instant) -> bool {
        self.phase(now) != PulsePhase::Idle
    }
}

/// The counter strip under the list
#[derive(Debug, Clone)]
pub struct StatsStrip {
    pub total: CounterCell,
    pub completed: CounterCell,
    pub pending: CounterCell,
}

impl StatsStrip {
    /// Seed the cells without a pulse; the first paint is not a change
    pub fn new(stats: Stats) -> Self {
        Self {
            total: CounterCell::new("Total", stats.total.to_string()),
            completed: CounterCell::new("Completed", stats.completed.to_string()),
            pending: CounterCell::new("Pending", stats.pending.to_string()),
        }
    }

    pub fn update(&mut self, stats: Stats, now: Instant) {
        self.total.update(stats.total.to_string(), now);
        self.completed.update(stats.completed.to_string(), now);
        self.pending.update(stats.pending.to_string(), now);
    }

    pub fn cells(&self) -> [&CounterCell; 3] {
        [&self.total, &self.completed, &self.pending]
    }

    /// True while any pulse is mid-flight, so the loop keeps repainting
    pub fn animating(&self, now: Instant) -> bool {
        self.cells().iter().any(|cell| cell.pulsing(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: "2025-06-01 09:00:00".to_string(),
        }
    }

    fn stats(total: usize, completed: usize) -> Stats {
        Stats {
            total,
            completed,
            pending: total - completed,
        }
    }

    #[test]
    fn rows_preserve_order_and_fields() {
        let tasks = vec![task(1, "Buy milk", false), task(2, "Call mom", true)];

        let rows = task_rows(&tasks);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].text, "Buy milk");
        assert!(!rows[0].completed);
        assert_eq!(rows[1].id, 2);
        assert!(rows[1].completed);
        assert_eq!(rows[1].created_at, "2025-06-01 09:00:00");
    }

    #[test]
    fn empty_list_yields_no_rows() {
        assert!(task_rows(&[]).is_empty());
    }

    #[test]
    fn display_text_neutralizes_control_characters() {
        assert_eq!(display_text("\x1b[31mred"), "\u{FFFD}[31mred");
        assert_eq!(display_text("a\tb\nc"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(display_text("café ☕"), "café ☕");
    }

    #[test]
    fn fresh_strip_does_not_animate() {
        let now = Instant::now();
        let strip = StatsStrip::new(stats(3, 1));

        assert!(!strip.animating(now));
        assert_eq!(strip.total.value, "3");
        assert_eq!(strip.completed.value, "1");
        assert_eq!(strip.pending.value, "2");
    }

    #[test]
    fn only_changed_cells_pulse() {
        let now = Instant::now();
        let mut strip = StatsStrip::new(stats(2, 1));

        // completed stays at 1, the other two move
        strip.update(stats(3, 1), now);
        assert!(strip.total.pulsing(now));
        assert!(strip.pending.pulsing(now));
        assert!(!strip.completed.pulsing(now));
    }

    #[test]
    fn unchanged_update_does_not_restart_a_pulse() {
        let now = Instant::now();
        let mut strip = StatsStrip::new(stats(1, 0));
        strip.update(stats(2, 0), now);

        let later = now + Duration::from_millis(PULSE_CONTRACT_MS + PULSE_EXPAND_MS + 50);
        strip.update(stats(2, 0), later);
        assert!(!strip.total.pulsing(later));
    }

    #[test]
    fn pulse_runs_contract_then_expand_then_settles() {
        let now = Instant::now();
        let mut strip = StatsStrip::new(stats(0, 0));
        strip.update(stats(1, 0), now);

        let cell = &strip.total;
        assert_eq!(cell.phase(now + Duration::from_millis(10)), PulsePhase::Contract);
        assert_eq!(
            cell.phase(now + Duration::from_millis(PULSE_CONTRACT_MS + 10)),
            PulsePhase::Expand
        );
        assert_eq!(
            cell.phase(now + Duration::from_millis(PULSE_CONTRACT_MS + PULSE_EXPAND_MS + 10)),
            PulsePhase::Idle
        );
    }

    #[test]
    fn phase_is_stable_for_a_fixed_clock() {
        let now = Instant::now();
        let mut strip = StatsStrip::new(stats(0, 0));
        strip.update(stats(1, 0), now);

        let probe = now + Duration::from_millis(20);
        assert_eq!(strip.total.phase(probe), strip.total.phase(probe));
    }
}
