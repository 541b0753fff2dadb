// src/lib.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

// --- Declare modules ---
pub mod calendar;
mod config;
pub mod edit;
pub mod store;
pub mod summary;

// --- Expose public types ---
pub use calendar::{DateCursor, DateKey};
pub use config::{
    get_config_path as get_config_path_util,
    get_log_path as get_log_path_util,
    load as load_config_util,
    parse_color,
    save as save_config_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
};
pub use edit::{EditMode, EditSession};
pub use store::{Error as StoreError, WorkoutField, WorkoutRecord, WorkoutStore};
pub use summary::{parse_duration, weekly_summary, weekly_total, WeeklySummary};

/// Process-wide state of one application run: the selected day and every
/// workout logged so far. Nothing here outlives the process.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    cursor: DateCursor,
    store: WorkoutStore,
    clock: fn() -> NaiveDate,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination or loading fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;

        Ok(Self::new(config, config_path))
    }

    /// Builds a service around an already loaded config, with the cursor on today
    /// and no workouts.
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self::with_clock(config, config_path, calendar::today)
    }

    /// Like [`AppService::new`], but "today" comes from `clock`. The cursor
    /// starts on `clock()` and the weekly summary uses it as its reference.
    pub fn with_clock(config: Config, config_path: PathBuf, clock: fn() -> NaiveDate) -> Self {
        Self {
            config,
            config_path,
            cursor: DateCursor::new(clock()),
            store: WorkoutStore::new(),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // --- Date cursor ---

    pub const fn selected_date(&self) -> NaiveDate {
        self.cursor.date()
    }

    pub fn selected_key(&self) -> DateKey {
        self.cursor.key()
    }

    pub fn previous_day(&mut self) {
        self.cursor.previous_day();
    }

    pub fn next_day(&mut self) {
        self.cursor.next_day();
    }

    /// Moves the selected day by `offset_days`; negative goes back.
    pub fn step_days(&mut self, offset_days: i64) {
        self.cursor.step(offset_days);
    }

    pub fn go_to_today(&mut self) {
        let today = self.today();
        self.cursor.set(today);
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.cursor.set(date);
    }

    // --- Workouts ---

    pub const fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn workouts_for_selected_date(&self) -> &[WorkoutRecord] {
        self.store.list_for(&self.cursor.key())
    }

    /// Opens `session` on the selected day's record at `index`.
    /// Returns `false` (and logs) if there is no such record.
    pub fn begin_edit(&self, session: &mut EditSession, index: usize) -> bool {
        let key = self.cursor.key();
        match session.start_edit(&self.store, &key, index) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Ignoring edit request: {e}");
                false
            }
        }
    }

    /// Writes the session's draft into the selected day.
    ///
    /// If the edited record no longer exists the store is left as it was, the
    /// failure is logged and the session is cancelled. Returns whether the store changed.
    pub fn commit_session(&mut self, session: &mut EditSession) -> bool {
        let key = self.cursor.key();
        match session.commit(&self.store, &key) {
            Ok(next) => {
                self.store = next;
                true
            }
            Err(e) => {
                tracing::warn!("Discarding workout edit: {e}");
                session.cancel();
                false
            }
        }
    }

    /// Deletes the selected day's record at `index`; later records move up by one.
    /// Returns `false` (and logs) if there is no such record.
    pub fn delete_workout(&mut self, index: usize) -> bool {
        let key = self.cursor.key();
        match self.store.remove_at(&key, index) {
            Ok(next) => {
                self.store = next;
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring delete request: {e}");
                false
            }
        }
    }

    /// Totals for the real current week. The selected day does not affect it.
    pub fn weekly_summary(&self) -> WeeklySummary {
        summary::weekly_summary(&self.store, self.today())
    }
}
