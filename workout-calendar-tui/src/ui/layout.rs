// workout-calendar-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, ActiveTab, App},
    ui::{
        day_tab::render_day_tab,
        modals::{render_help_modal, render_workout_form},
        status_bar::render_status_bar,
        tabs::render_tabs,
        week_tab::render_week_tab,
    },
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Create main layout: Tabs on top, content below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_tabs(f, app, main_chunks[0]);
    match app.active_tab {
        ActiveTab::Day => render_day_tab(f, app, main_chunks[1]),
        ActiveTab::Week => render_week_tab(f, app, main_chunks[1]),
    }
    render_status_bar(f, app, main_chunks[2]);

    // Render modals last so they sit on top
    if app.edit_session.is_modal_open() {
        render_workout_form(f, app);
    } else if app.active_modal == ActiveModal::Help {
        render_help_modal(f, app);
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle with a fixed height, for forms that need an exact number of rows
pub fn centered_rect_fixed(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);
    centered_rect(percent_x, 100, vertical[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{
        backend::{Backend, TestBackend},
        Terminal,
    };
    use workout_calendar_lib::{AppService, Config};

    fn render_to_string(app: &mut App) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|f| render_ui(f, app))?;
        let buffer = terminal.backend().buffer();
        Ok(buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn app_on(date: NaiveDate) -> App {
        let mut service = AppService::with_clock(
            Config::default(),
            "test_config.toml".into(),
            fixed_today,
        );
        service.go_to_date(date);
        let mut app = App::new(service);
        app.refresh_data_for_active_tab();
        app
    }

    fn press(app: &mut App, code: KeyCode) -> Result<()> {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn day_tab_shows_selected_date_and_rows() -> Result<()> {
        let mut app = app_on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        press(&mut app, KeyCode::Char('a'))?;
        for c in "rowing".chars() {
            press(&mut app, KeyCode::Char(c))?;
        }
        let screen = render_to_string(&mut app)?;
        assert!(screen.contains("Add Workout (2024-06-10)"));
        assert!(screen.contains("Duration (minutes):"));

        press(&mut app, KeyCode::Esc)?;
        press(&mut app, KeyCode::Char('a'))?;
        for c in "rowing".chars() {
            press(&mut app, KeyCode::Char(c))?;
        }
        app.submit_workout_form();

        let screen = render_to_string(&mut app)?;
        assert!(screen.contains("2024-06-10"));
        assert!(screen.contains("rowing"));
        assert!(screen.contains("1 workout"));
        Ok(())
    }

    #[test]
    fn edit_form_uses_save_label() -> Result<()> {
        let mut app = app_on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        press(&mut app, KeyCode::Char('a'))?;
        app.submit_workout_form();
        press(&mut app, KeyCode::Char('e'))?;

        let screen = render_to_string(&mut app)?;
        assert!(screen.contains("Edit Workout #1"));
        assert!(screen.contains(" Save "));
        Ok(())
    }

    #[test]
    fn week_tab_and_help_render() -> Result<()> {
        let mut app = app_on(fixed_today());
        press(&mut app, KeyCode::Char('w'))?;
        let screen = render_to_string(&mut app)?;
        assert!(screen.contains("Total workout time this week"));
        assert!(screen.contains("0 minutes"));

        app.active_modal = ActiveModal::Help;
        let screen = render_to_string(&mut app)?;
        assert!(screen.contains("Help (?)"));
        Ok(())
    }

    #[test]
    fn form_cursor_stays_inside_long_input() -> Result<()> {
        let mut app = app_on(fixed_today());
        press(&mut app, KeyCode::Char('a'))?;
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;

        // Form spans columns 25..75; inputs sit two columns in from each border
        for c in "run".chars() {
            press(&mut app, KeyCode::Char(c))?;
        }
        terminal.draw(|f| render_ui(f, &mut app))?;
        let (x, _) = terminal.backend_mut().get_cursor()?;
        assert_eq!(x, 27 + 3);

        for c in "x".repeat(57).chars() {
            press(&mut app, KeyCode::Char(c))?;
        }
        assert_eq!(app.edit_session.draft().sport.chars().count(), 60);
        terminal.draw(|f| render_ui(f, &mut app))?;
        let (x, y) = terminal.backend_mut().get_cursor()?;
        assert!((27..73).contains(&x), "cursor x = {x}");
        assert_eq!(x, 72);

        // Same row as the Sport input, not the label
        let screen = render_to_string(&mut app)?;
        let row = screen.lines().nth(usize::from(y)).unwrap_or_default();
        assert!(row.contains("runxxx"));
        Ok(())
    }
}
