use super::state::{ActiveTab, App};

// Make refresh logic methods on App
impl App {
    // Fetch or update data based on the active tab
    pub fn refresh_data_for_active_tab(&mut self) {
        self.clear_expired_status();

        match self.active_tab {
            ActiveTab::Day => self.refresh_day_data(),
            ActiveTab::Week => {} // Snapshot is taken when the tab opens
        }
    }

    // --- Day Tab Data ---
    pub(crate) fn refresh_day_data(&mut self) {
        self.day_workouts = self.service.workouts_for_selected_date().to_vec();

        // Clamp selection index
        if self.day_table_state.selected().unwrap_or(0) >= self.day_workouts.len() {
            self.day_table_state.select(if self.day_workouts.is_empty() {
                None
            } else {
                Some(self.day_workouts.len() - 1)
            });
        } else if self.day_table_state.selected().is_none() {
            self.day_table_state.select(Some(0));
        }
    }

    // --- Week Tab Data ---
    pub(crate) fn refresh_week_data(&mut self) {
        self.week_summary = Some(self.service.weekly_summary());
    }
}

/// Moves the viewed day by `days` and puts the selection back on the first row.
pub fn day_change_date(app: &mut App, days: i64) {
    app.service.step_days(days);
    reset_day_selection(app);
}

pub fn day_go_to_today(app: &mut App) {
    app.service.go_to_today();
    reset_day_selection(app);
}

fn reset_day_selection(app: &mut App) {
    app.day_table_state.select(Some(0));
    app.refresh_day_data();
}
