// workout-calendar-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, ActiveTab, App};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.edit_session.is_modal_open() {
        " [Esc] Cancel | [Enter] Next/Confirm | [Tab/↑↓] Navigate | [Ctrl+S] Save "
    } else {
        match app.active_modal {
            ActiveModal::Help => " [Esc/Enter/?] Close Help ",
            ActiveModal::None => match app.active_tab {
                ActiveTab::Day => "[←→/hl] Date | [HL] Week | [t]oday | [↑↓/jk] Nav | [a]dd | [e]dit | [d]elete | [w]eek | [?] Help | [q]uit ",
                ActiveTab::Week => "[Esc/b] Back | [r]efresh | [?] Help | [q]uit ",
            },
        }
    };

    let message_text = app.status_message.as_deref().unwrap_or("");

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::LightGreen))
        .alignment(Alignment::Right);
    f.render_widget(message_paragraph, status_chunks[1]);
}
