use crate::app::App;
use crate::ui::theme_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use workout_calendar_lib::calendar;

pub fn render_day_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let today = app.service.today();
    let viewed = app.service.selected_date();
    let viewed_key = app.service.selected_key();
    let date_header_str = if viewed == today {
        format!("--- Today ({viewed_key}) ---")
    } else if viewed == calendar::shift(today, -1) {
        format!("--- Yesterday ({viewed_key}) ---")
    } else if viewed == calendar::shift(today, 1) {
        format!("--- Tomorrow ({viewed_key}) ---")
    } else {
        format!("--- {} ({viewed_key}) ---", viewed.format("%A"))
    };

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header_color = theme_color(app.service.config.theme.header());
    let date_header = Paragraph::new(date_header_str)
        .style(Style::default().fg(header_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(date_header, outer_chunks[0]);

    render_workout_table(f, app, outer_chunks[1]);
}

fn render_workout_table(f: &mut Frame, app: &mut App, area: Rect) {
    let accent = theme_color(app.service.config.theme.accent());
    let title = match app.day_workouts.len() {
        0 => "No workouts logged - press [a] to add one".to_string(),
        1 => "1 workout".to_string(),
        n => format!("{n} workouts"),
    };
    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(accent));

    let duration_header = format!("Duration ({})", app.service.config.duration_unit);
    let header_style = Style::default().fg(Color::LightBlue);
    let header = Row::new(vec![
        Cell::from("#").style(header_style),
        Cell::from("Sport").style(header_style),
        Cell::from(duration_header).style(header_style),
        Cell::from("Intensity").style(header_style),
    ])
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .day_workouts
        .iter()
        .enumerate()
        .map(|(i, w)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(placeholder_if_blank(&w.sport)),
                Cell::from(placeholder_if_blank(&w.duration)),
                Cell::from(placeholder_if_blank(&w.intensity)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(40),
        Constraint::Length(20),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.day_table_state);
}

fn placeholder_if_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
