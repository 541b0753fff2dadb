// workout-calendar-tui/src/ui/tabs.rs
use crate::app::{ActiveTab, App};
use crate::ui::theme_color;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ["Day (F1)", "Week (F2)"]
        .iter()
        .map(|t| Line::from(Span::styled(*t, Style::default().fg(Color::Gray))))
        .collect();

    let selected_tab_index = match app.active_tab {
        ActiveTab::Day => 0,
        ActiveTab::Week => 1,
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected_tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(theme_color(app.service.config.theme.accent()))
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
