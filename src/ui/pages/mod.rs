//! One renderer per page

pub mod add_user;
pub mod api_status;
pub mod manage_points;
pub mod users;

use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Rounded card used by every page.
pub(crate) fn card(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
}

/// Pretty JSON echo of an API record.
pub(crate) fn json_echo<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

/// Height needed by a bordered block showing `lines` lines.
pub(crate) fn boxed_height(lines: usize) -> u16 {
    lines as u16 + 2
}
