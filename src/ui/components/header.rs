//! Header component
//!
//! Renders the title and the page tabs

use crate::ui::state::Page;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use strum::IntoEnumIterator;

/// Render header with title and navigation tabs.
pub fn render_header(f: &mut Frame, area: Rect, current: Page) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "POINT MANAGEMENT SYSTEM v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let titles: Vec<Line> = Page::iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, header_chunks[1]);
}
