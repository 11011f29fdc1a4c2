//! UI utility functions
//!
//! Helpers shared by the page renderers and components

use crate::notices::NoticeKind;
use ratatui::prelude::Color;

/// Get a ratatui color for a notice based on its kind
pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::LightRed,
    }
}

pub fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✅",
        NoticeKind::Info => "ℹ️",
        NoticeKind::Warning => "⚠️",
        NoticeKind::Error => "❌",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Shortens reqwest's transport errors for the single-line notice panel.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") {
        if let Some((prefix, _)) = msg.split_once("error sending request") {
            return format!("{}API unreachable (connection failed)", prefix);
        }
    }
    msg.to_string()
}
