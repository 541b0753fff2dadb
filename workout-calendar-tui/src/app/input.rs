// src/app/input.rs
use super::{
    data::{day_change_date, day_go_to_today},
    modals::handle_workout_form_input,
    navigation_helpers::{table_next, table_previous},
    state::{ActiveModal, ActiveTab, App},
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // The entry form captures every key while it is open
        if self.edit_session.is_modal_open() {
            handle_workout_form_input(self, key);
            return Ok(());
        }
        if self.active_modal != ActiveModal::None {
            self.handle_help_modal_input(key);
            return Ok(());
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::F(1) => self.show_day_tab(),
            KeyCode::F(2) => self.show_week_tab(),
            _ => match self.active_tab {
                ActiveTab::Day => self.handle_day_input(key),
                ActiveTab::Week => self.handle_week_input(key),
            },
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }

    // --- Tab-Specific Input Handling ---
    fn handle_day_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                table_previous(&mut self.day_table_state, self.day_workouts.len());
            }
            KeyCode::Char('j') | KeyCode::Down => {
                table_next(&mut self.day_table_state, self.day_workouts.len());
            }
            KeyCode::Char('h') | KeyCode::Left => day_change_date(self, -1),
            KeyCode::Char('l') | KeyCode::Right => day_change_date(self, 1),
            KeyCode::Char('H') => day_change_date(self, -7),
            KeyCode::Char('L') => day_change_date(self, 7),
            KeyCode::Char('t') => day_go_to_today(self),
            KeyCode::Char('a') => self.open_add_workout_form(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_workout_form(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_workout(),
            KeyCode::Char('w') => self.show_week_tab(),
            _ => {}
        }
    }

    fn handle_week_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('w') => self.show_day_tab(),
            KeyCode::Char('r') => self.refresh_week_data(),
            _ => {}
        }
    }
}
