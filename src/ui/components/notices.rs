//! Notices panel component
//!
//! Renders the most recent operation messages, newest first

use crate::dashboard::Dashboard;
use crate::ui::utils::{
    clean_http_error_message, format_compact_timestamp, notice_color, notice_icon,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the notices panel.
pub fn render_notices_panel(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    // Borders take two rows
    let max_lines = (area.height.saturating_sub(2) as usize).max(1);

    let lines: Vec<Line> = dashboard
        .notices()
        .filter(|notice| notice.should_display())
        .rev()
        .take(max_lines)
        .map(|notice| {
            Line::from(vec![
                Span::raw(format!("{} ", notice_icon(notice.kind))),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&notice.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    clean_http_error_message(&notice.msg),
                    Style::default().fg(notice_color(notice.kind)),
                ),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet.")])
    } else {
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
