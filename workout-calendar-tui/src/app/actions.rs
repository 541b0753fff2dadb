// workout-calendar-tui/src/app/actions.rs
use super::state::{ActiveTab, App, FormFocus};

impl App {
    pub(crate) fn open_add_workout_form(&mut self) {
        self.edit_session.start_create();
        self.form_focus = FormFocus::default();
    }

    pub(crate) fn open_edit_workout_form(&mut self) {
        let Some(index) = self.selected_workout_index() else {
            return;
        };
        if self.service.begin_edit(&mut self.edit_session, index) {
            self.form_focus = FormFocus::default();
        } else {
            // The list on screen was stale
            self.refresh_day_data();
        }
    }

    pub(crate) fn submit_workout_form(&mut self) {
        let was_editing = self.edit_session.is_editing();
        let committed = self.service.commit_session(&mut self.edit_session);
        self.form_focus = FormFocus::default();
        self.refresh_day_data();

        if !committed {
            return;
        }
        if was_editing {
            self.set_status("Workout saved".to_string());
        } else {
            // Highlight the row just appended
            self.day_table_state
                .select(self.day_workouts.len().checked_sub(1));
            self.set_status("Workout added".to_string());
        }
    }

    pub(crate) fn cancel_workout_form(&mut self) {
        self.edit_session.cancel();
        self.form_focus = FormFocus::default();
    }

    // Deletes right away, no confirmation step
    pub(crate) fn delete_selected_workout(&mut self) {
        let Some(index) = self.selected_workout_index() else {
            return;
        };
        if self.service.delete_workout(index) {
            self.set_status("Workout deleted".to_string());
        }
        self.refresh_day_data();
    }

    pub(crate) fn show_week_tab(&mut self) {
        self.refresh_week_data();
        self.active_tab = ActiveTab::Week;
    }

    pub(crate) fn show_day_tab(&mut self) {
        self.active_tab = ActiveTab::Day;
        self.refresh_day_data();
    }
}
