// workout-calendar-tui/src/app/modals.rs
use super::state::{App, FormFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// --- Entry form input ---

pub fn handle_workout_form_input(app: &mut App, key: KeyEvent) {
    // Global form keys first
    match key.code {
        KeyCode::Esc => {
            app.cancel_workout_form();
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_focus = app.form_focus.next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_focus = app.form_focus.previous();
            return;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_workout_form();
            return;
        }
        _ => {}
    }

    match app.form_focus {
        FormFocus::Field(field) => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = app.edit_session.draft().field(field).to_string();
                value.push(c);
                app.edit_session.update_draft_field(field, value);
            }
            KeyCode::Backspace => {
                let mut value = app.edit_session.draft().field(field).to_string();
                if value.pop().is_some() {
                    app.edit_session.update_draft_field(field, value);
                }
            }
            KeyCode::Enter => app.form_focus = app.form_focus.next(),
            _ => {}
        },
        FormFocus::Confirm => match key.code {
            KeyCode::Enter => app.submit_workout_form(),
            KeyCode::Left | KeyCode::Right => app.form_focus = FormFocus::Cancel,
            _ => {}
        },
        FormFocus::Cancel => match key.code {
            KeyCode::Enter => app.cancel_workout_form(),
            KeyCode::Left | KeyCode::Right => app.form_focus = FormFocus::Confirm,
            _ => {}
        },
    }
}
