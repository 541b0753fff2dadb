mod day_tab;
mod layout;
mod modals;
mod status_bar;
mod tabs;
mod week_tab;

// Re-export the main render function
pub use layout::render_ui;

use ratatui::style::Color;
use workout_calendar_lib::StandardColor;

// Maps a configured theme colour onto the terminal palette
pub(crate) const fn theme_color(color: StandardColor) -> Color {
    match color {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::LightRed,
        StandardColor::Green => Color::LightGreen,
        StandardColor::Yellow => Color::Yellow,
        StandardColor::Blue => Color::LightBlue,
        StandardColor::Magenta => Color::LightMagenta,
        StandardColor::Cyan => Color::LightCyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::DarkRed => Color::Red,
        StandardColor::DarkGreen => Color::Green,
        StandardColor::DarkYellow => Color::Rgb(184, 134, 11),
        StandardColor::DarkBlue => Color::Blue,
        StandardColor::DarkMagenta => Color::Magenta,
        StandardColor::DarkCyan => Color::Cyan,
        StandardColor::Grey => Color::Gray,
    }
}

/// Formats a summed duration without a trailing `.0` for whole values.
pub(crate) fn format_total(total: f64) -> String {
    if total.fract() == 0.0 && total.abs() < 1e15 {
        format!("{total:.0}")
    } else {
        format!("{total:.2}")
    }
}
