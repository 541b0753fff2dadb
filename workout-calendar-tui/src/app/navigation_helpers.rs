// src/app/navigation_helpers.rs
use ratatui::widgets::TableState;

pub fn table_next(state: &mut TableState, row_count: usize) {
    if row_count == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= row_count - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn table_previous(state: &mut TableState, row_count: usize) {
    if row_count == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => row_count - 1,
        Some(i) => (i - 1).min(row_count - 1),
        None => row_count - 1,
    };
    state.select(Some(i));
}
