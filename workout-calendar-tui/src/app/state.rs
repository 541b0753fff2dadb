// workout-calendar-tui/src/app/state.rs
use ratatui::widgets::TableState;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use workout_calendar_lib::{AppService, EditSession, WeeklySummary, WorkoutField, WorkoutRecord};

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

// Represents the active UI tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Day,
    Week,
}

// Focusable elements of the workout entry form, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    Field(WorkoutField),
    Confirm,
    Cancel,
}

impl FormFocus {
    fn order() -> Vec<Self> {
        WorkoutField::iter()
            .map(FormFocus::Field)
            .chain([FormFocus::Confirm, FormFocus::Cancel])
            .collect()
    }

    pub fn next(self) -> Self {
        let order = Self::order();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    pub fn previous(self) -> Self {
        let order = Self::order();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(WorkoutField::Sport)
    }
}

// Modals other than the entry form, whose visibility lives in the EditSession
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    Help,
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub active_tab: ActiveTab,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub status_message: Option<String>, // Shown in the status bar until it expires
    pub status_clear_time: Option<Instant>,

    // === Day Tab State ===
    pub day_workouts: Vec<WorkoutRecord>,
    pub day_table_state: TableState,

    // === Entry Form State ===
    pub edit_session: EditSession,
    pub form_focus: FormFocus,

    // === Week Tab State ===
    pub week_summary: Option<WeeklySummary>, // Snapshot taken when the tab is opened
}

impl App {
    pub fn new(service: AppService) -> Self {
        let mut app = App {
            service,
            active_tab: ActiveTab::Day,
            should_quit: false,
            active_modal: ActiveModal::None,
            status_message: None,
            status_clear_time: None,
            day_workouts: Vec::new(),
            day_table_state: TableState::default(),
            edit_session: EditSession::new(),
            form_focus: FormFocus::default(),
            week_summary: None,
        };
        app.day_table_state.select(Some(0));
        app
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
    }

    pub(crate) fn clear_expired_status(&mut self) {
        if let Some(clear_time) = self.status_clear_time {
            if Instant::now() >= clear_time {
                self.status_message = None;
                self.status_clear_time = None;
            }
        }
    }

    /// Index of the highlighted row, if it points at a workout.
    pub fn selected_workout_index(&self) -> Option<usize> {
        self.day_table_state
            .selected()
            .filter(|i| *i < self.day_workouts.len())
    }
}
