//! Footer component
//!
//! Renders the key bindings of the current page

use crate::ui::state::View;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn key_help(view: &View) -> &'static str {
    match view {
        View::Users(_) => "[1-4] Page | [Tab] Next | [R] Refresh | [Q] Quit",
        View::AddUser(_) => "Type a name | [Enter] Create | [Tab] Next page | [Esc] Quit",
        View::ManagePoints(state) if state.pending_delete => {
            "[Y] Confirm deletion | any other key cancels"
        }
        View::ManagePoints(_) => {
            "[Up/Down] User | [Left/Right] Set/Add | [Enter] Apply | [D] Delete | [R] Refresh | [Q] Quit"
        }
        View::ApiStatus(_) => "[1-4] Page | [Tab] Next | [R] Re-check | [Q] Quit",
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, view: &View) {
    let footer = Paragraph::new(key_help(view))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
