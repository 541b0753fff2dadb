// workout-calendar-tui/src/ui/modals.rs
use crate::{
    app::{App, FormFocus},
    ui::layout::{centered_rect, centered_rect_fixed},
    ui::theme_color,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;
use workout_calendar_lib::{EditMode, WorkoutField};

pub fn render_help_modal(f: &mut Frame, app: &App) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().fg(theme_color(app.service.config.theme.accent())));
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" F1 / F2: Day / Week Tabs"),
        Line::from(""),
        Line::from("--- Day Tab (F1) ---").style(Style::new().bold().underlined()),
        Line::from(" h / ←: Previous Day"),
        Line::from(" l / →: Next Day"),
        Line::from(" H / L: Previous / Next Week"),
        Line::from(" t: Jump to Today"),
        Line::from(" k/j / ↑/↓: Select Workout"),
        Line::from(" a: Add Workout"),
        Line::from(" e / Enter: Edit Selected Workout"),
        Line::from(" d / Delete: Delete Selected Workout"),
        Line::from(" w: Weekly Summary"),
        Line::from(""),
        Line::from("--- Workout Form ---").style(Style::new().bold().underlined()),
        Line::from(" Tab/↓ and Shift+Tab/↑: Move Between Fields"),
        Line::from(" Enter: Next Field / Press Button"),
        Line::from(" Ctrl+S: Add or Save Immediately"),
        Line::from(" Esc: Close Without Saving"),
        Line::from(""),
        Line::from("--- Week Tab (F2) ---").style(Style::new().bold().underlined()),
        Line::from(" r: Recompute From Current Workouts"),
        Line::from(" Esc / b / w: Back to Day Tab"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

pub fn render_workout_form(f: &mut Frame, app: &App) {
    let session = &app.edit_session;
    let title = match session.mode() {
        EditMode::Creating => format!("Add Workout ({})", app.service.selected_key()),
        EditMode::Editing(index) => format!(
            "Edit Workout #{} ({})",
            index + 1,
            app.service.selected_key()
        ),
    };
    let accent = theme_color(app.service.config.theme.accent());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::new().fg(accent));
    let area = centered_rect_fixed(50, 12, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sport label
            Constraint::Length(1), // Sport input
            Constraint::Length(1), // Duration label
            Constraint::Length(1), // Duration input
            Constraint::Length(1), // Intensity label
            Constraint::Length(1), // Intensity input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    for (i, field) in WorkoutField::iter().enumerate() {
        let label_area = chunks[i * 2];
        let input_area = chunks[i * 2 + 1];
        let label = match field {
            WorkoutField::Duration => format!("{field} ({}):", app.service.config.duration_unit),
            _ => format!("{field}:"),
        };
        f.render_widget(Paragraph::new(label), label_area);

        let value = session.draft().field(field);
        let focused = app.form_focus == FormFocus::Field(field);
        let input_style = if focused {
            Style::default().reversed()
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(value).style(input_style), input_area);
        if focused {
            let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            f.set_cursor(
                input_area
                    .x
                    .saturating_add(typed)
                    .min(input_area.right().saturating_sub(1)),
                input_area.y,
            );
        }
    }

    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[7]);

    let button_style = |focus: FormFocus| {
        if app.form_focus == focus {
            Style::default().reversed()
        } else {
            Style::default()
        }
    };
    let ok_button = Paragraph::new(format!(" {} ", session.commit_label()))
        .alignment(Alignment::Center)
        .style(button_style(FormFocus::Confirm));
    f.render_widget(ok_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(button_style(FormFocus::Cancel));
    f.render_widget(cancel_button, button_layout[1]);
}
