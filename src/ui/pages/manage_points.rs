//! Manage Points page
//!
//! User selector on the left; set, add and delete forms on the right.

use super::{boxed_height, card, json_echo};
use crate::ui::state::{ManagePointsView, PointsField};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub fn render_manage_points_page(f: &mut Frame, area: Rect, view: &ManagePointsView) {
    let users = match &view.users {
        None => {
            let msg = Paragraph::new("Could not load users. Press [R] to retry.")
                .style(Style::default().fg(Color::LightRed))
                .block(card("MANAGE POINTS", Color::LightRed));
            f.render_widget(msg, area);
            return;
        }
        Some(users) if users.is_empty() => {
            let msg = Paragraph::new("No users found. Add some users first!")
                .style(Style::default().fg(Color::LightBlue))
                .block(card("MANAGE POINTS", Color::Cyan));
            f.render_widget(msg, area);
            return;
        }
        Some(users) => users,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let selector = List::new(
        users
            .iter()
            .map(|user| ListItem::new(user.selector_label())),
    )
    .block(card("SELECT USER", Color::Cyan))
    .highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");
    // Scrolls so the selected user stays visible
    let mut selector_state = ListState::default().with_selected(Some(view.selected));
    f.render_stateful_widget(selector, columns[0], &mut selector_state);

    let forms = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(boxed_height(1)),
            Constraint::Length(boxed_height(1)),
            Constraint::Length(boxed_height(2)),
            Constraint::Fill(1),
        ])
        .split(columns[1]);

    f.render_widget(
        Paragraph::new(format!("Current points: {}", view.current_points()))
            .style(Style::default().fg(Color::LightBlue)),
        forms[0],
    );

    let field_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(forms[1]);
    render_field(
        f,
        field_row[0],
        "SET POINTS",
        &view.set_input,
        view.focus == PointsField::Set,
    );
    render_field(
        f,
        field_row[1],
        "ADD POINTS",
        &view.add_input,
        view.focus == PointsField::Add,
    );

    let name = view
        .selected_user()
        .map(|u| u.selector_label())
        .unwrap_or_default();
    let delete = if view.pending_delete {
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Confirm deletion - this cannot be undone!",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Press [Y] to delete {}, any other key to cancel.", name)),
        ])
        .block(card("DELETE USER", Color::LightRed))
    } else {
        Paragraph::new(format!("Press [D] to delete {}", name))
            .style(Style::default().fg(Color::DarkGray))
            .block(card("DELETE USER", Color::DarkGray))
    };
    f.render_widget(delete, forms[2]);

    if let Some(user) = &view.last_updated {
        f.render_widget(
            Paragraph::new(json_echo(user)).block(card("UPDATED USER", Color::Green)),
            forms[3],
        );
    }
}

fn render_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let color = if focused { Color::LightYellow } else { Color::DarkGray };
    let cursor = if focused { "_" } else { "" };
    f.render_widget(
        Paragraph::new(format!("{}{}", value, cursor)).block(card(title, color)),
        area,
    );
}
