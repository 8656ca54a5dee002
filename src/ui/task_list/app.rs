use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;

use crate::actions::{self, ActionOutcome};
use crate::error::{Error, Result};
use crate::notify::{NoticeKind, Notifier, DEFAULT_NOTICE_MS, SHORT_NOTICE_MS};
use crate::task::TaskStore;

use super::model::{self, StatsStrip, TaskRow};
use super::view;

const EVENT_POLL_MS: u64 = 120;
const SHAKE_MS: u64 = 450;
const SHAKE_STEP_MS: u64 = 60;

/// Pending delete awaiting a y/n answer; all other input is swallowed
pub struct DeleteConfirm {
    pub(crate) id: u64,
    pub(crate) text: String,
}

pub struct AppState {
    pub(crate) rows: Vec<TaskRow>,
    pub(crate) selected: Option<usize>,
    pub(crate) list_state: ListState,
    pub(crate) input: String,
    pub(crate) input_active: bool,
    pub(crate) stats: StatsStrip,
    pub(crate) notices: Notifier,
    pub(crate) delete_confirm: Option<DeleteConfirm>,
    pub(crate) now: Instant,
    shake_until: Option<Instant>,
    export_dir: PathBuf,
    store: TaskStore,
}

impl AppState {
    fn new(store: TaskStore, export_dir: PathBuf) -> Self {
        let now = Instant::now();
        let rows = model::task_rows(store.tasks());
        let stats = StatsStrip::new(store.stats());
        let selected = if rows.is_empty() { None } else { Some(0) };
        let mut list_state = ListState::default();
        list_state.select(selected);
        Self {
            rows,
            selected,
            list_state,
            input: String::new(),
            input_active: true,
            stats,
            notices: Notifier::new(),
            delete_confirm: None,
            now,
            shake_until: None,
            export_dir,
            store,
        }
    }

    pub(crate) fn footer_hint(&self) -> String {
        if self.delete_confirm.is_some() {
            return "y/enter confirm delete  n/esc cancel".to_string();
        }
        if self.input_active {
            return "type the task  enter add  esc list".to_string();
        }
        "j/k move  space toggle  d delete  e export  i add  esc/q quit".to_string()
    }

    pub(crate) fn input_shaking(&self, now: Instant) -> bool {
        self.shake_until.map_or(false, |until| now < until)
    }

    /// Alternates while the shake runs, one step per `SHAKE_STEP_MS`
    pub(crate) fn shake_nudge(&self, now: Instant) -> bool {
        let Some(until) = self.shake_until else {
            return false;
        };
        if now >= until {
            return false;
        }
        let remaining = until.saturating_duration_since(now).as_millis() as u64;
        (remaining / SHAKE_STEP_MS) % 2 == 1
    }

    pub(crate) fn sync_selection(&mut self) {
        self.list_state.select(self.selected);
    }

    fn has_live_effects(&self) -> bool {
        self.stats.animating(self.now) || self.input_shaking(self.now)
    }

    fn selected_id(&self) -> Option<u64> {
        self.selected
            .and_then(|idx| self.rows.get(idx))
            .map(|row| row.id)
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or(0);
        let max = self.rows.len().saturating_sub(1);
        let next = (current as isize + delta).clamp(0, max as isize) as usize;
        self.selected = Some(next);
    }

    fn submit_input(&mut self) {
        match actions::submit_text(&mut self.store, &self.input) {
            Ok(outcome) => {
                self.input.clear();
                self.apply_outcome(outcome, Duration::from_millis(DEFAULT_NOTICE_MS));
            }
            Err(err) => {
                self.shake_until = Some(self.now + Duration::from_millis(SHAKE_MS));
                self.notices.notify(err.to_string(), NoticeKind::Warning);
            }
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match actions::toggle_task(&mut self.store, id) {
            Ok(outcome) => self.apply_outcome(outcome, Duration::from_millis(DEFAULT_NOTICE_MS)),
            Err(err) => self.notices.notify(err.to_string(), NoticeKind::Error),
        }
    }

    fn request_delete(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        let Some(row) = self.rows.get(idx) else {
            return;
        };
        self.delete_confirm = Some(DeleteConfirm {
            id: row.id,
            text: row.text.clone(),
        });
    }

    fn confirm_delete(&mut self, id: u64) {
        match actions::remove_task(&mut self.store, id) {
            Ok(outcome) => self.apply_outcome(outcome, Duration::from_millis(SHORT_NOTICE_MS)),
            Err(err) => self.notices.notify(err.to_string(), NoticeKind::Error),
        }
    }

    fn export_tasks(&mut self) {
        match actions::export_tasks(&self.store, &self.export_dir) {
            Ok(outcome) => self.apply_outcome(outcome, Duration::from_millis(DEFAULT_NOTICE_MS)),
            Err(err @ Error::NothingToExport) => {
                self.notices.notify(err.to_string(), NoticeKind::Warning);
            }
            Err(err) => {
                self.notices
                    .notify(format!("Export failed: {err}"), NoticeKind::Error);
            }
        }
    }

    fn apply_outcome(&mut self, outcome: ActionOutcome, duration: Duration) {
        if outcome.changed {
            self.refresh();
        }
        self.notices.notify_for(outcome.message, outcome.kind, duration);
    }

    /// Rebuild the whole view model from the store after any change
    fn refresh(&mut self) {
        self.rows = model::task_rows(self.store.tasks());
        self.stats.update(self.store.stats(), self.now);
        if self.rows.is_empty() {
            self.selected = None;
        } else {
            let max = self.rows.len() - 1;
            self.selected = Some(self.selected.map_or(0, |idx| idx.min(max)));
        }
        self.sync_selection();
    }
}

pub fn run(store: TaskStore, export_dir: PathBuf) -> Result<()> {
    let mut app = AppState::new(store, export_dir);
    run_terminal(&mut app)
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut dirty = true;
    loop {
        app.now = Instant::now();
        if app.notices.prune(app.now) {
            dirty = true;
        }

        if dirty || app.has_live_effects() {
            terminal.draw(|frame| view::render(frame, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if let Some(confirm) = app.delete_confirm.take() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                app.confirm_delete(confirm.id);
            }
            KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => {
                app.notices.notify_for(
                    "Delete cancelled",
                    NoticeKind::Info,
                    Duration::from_millis(SHORT_NOTICE_MS),
                );
            }
            _ => {
                app.delete_confirm = Some(confirm);
            }
        }
        return false;
    }

    if app.input_active {
        match key.code {
            KeyCode::Esc => {
                app.input_active = false;
            }
            KeyCode::Enter => app.submit_input(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                if !ch.is_control() {
                    app.input.push(ch);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_selection(1);
            false
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_selected();
            false
        }
        KeyCode::Char('d') => {
            app.request_delete();
            false
        }
        KeyCode::Char('e') => {
            app.export_tasks();
            false
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_active = true;
            false
        }
        _ => false,
    }
}
