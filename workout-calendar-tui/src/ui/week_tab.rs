// workout-calendar-tui/src/ui/week_tab.rs
use crate::app::App;
use crate::ui::{format_total, theme_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};
use workout_calendar_lib::calendar;

pub fn render_week_tab(f: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.week_summary else {
        let empty = Paragraph::new("Open this tab with [w] or F2 to compute the week")
            .block(Block::default().borders(Borders::ALL).title("This Week"));
        f.render_widget(empty, area);
        return;
    };

    let unit = &app.service.config.duration_unit;
    let header_color = theme_color(app.service.config.theme.header());
    let accent = theme_color(app.service.config.theme.accent());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let total_text = vec![
        Line::from(format!(
            "Week of {} to {}",
            calendar::key(&summary.week_start),
            calendar::key(&summary.week_end())
        )),
        Line::from(Span::styled(
            format!("{} {}", format_total(summary.total), unit),
            Style::default().fg(header_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} of 7 days active", summary.active_days()),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];
    let total_block = Block::default()
        .borders(Borders::ALL)
        .title("Total workout time this week")
        .border_style(Style::default().fg(accent));
    f.render_widget(
        Paragraph::new(total_text)
            .alignment(Alignment::Center)
            .block(total_block),
        chunks[0],
    );

    // Bar values must be non-negative integers; the total above stays exact
    let labels: Vec<String> = summary
        .days
        .iter()
        .map(|(date, _)| date.format("%a %d").to_string())
        .collect();
    let bars: Vec<(&str, u64)> = labels
        .iter()
        .zip(summary.days.iter())
        .map(|(label, (_, total))| (label.as_str(), (*total).max(0.0).round() as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Per day ({unit})")),
        )
        .data(bars.as_slice())
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(header_color))
        .value_style(Style::default().fg(Color::Black).bg(header_color));
    f.render_widget(chart, chunks[1]);
}
