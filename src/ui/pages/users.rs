//! Users Dashboard page
//!
//! Top three users as medal cards, then every user in a table.

use super::card;
use crate::dashboard::top_users;
use crate::models::User;
use crate::ui::state::UsersView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, Wrap};

pub fn render_users_page(f: &mut Frame, area: Rect, view: &UsersView) {
    let users = match &view.users {
        None => {
            let msg = Paragraph::new("Could not load users. Press [R] to retry.")
                .style(Style::default().fg(Color::LightRed))
                .block(card("USERS", Color::LightRed));
            f.render_widget(msg, area);
            return;
        }
        Some(users) if users.is_empty() => {
            let msg = Paragraph::new("No users found. Add some users to get started!")
                .style(Style::default().fg(Color::LightBlue))
                .block(card("USERS", Color::Cyan));
            f.render_widget(msg, area);
            return;
        }
        Some(users) => users,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    render_top_users(f, chunks[0], users);
    render_users_table(f, chunks[1], users);
}

fn render_top_users(f: &mut Frame, area: Rect, ranked: &[User]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, (medal, user)) in top_users(ranked).into_iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", medal.symbol(), user.display_name()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Points: {}", user.points)),
            Line::from(Span::styled(
                format!("ID: {}", user.short_id()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let title = if i == 0 { "TOP USERS" } else { "" };
        let widget = Paragraph::new(lines)
            .block(card(title, Color::Green))
            .wrap(Wrap { trim: true });
        f.render_widget(widget, columns[i]);
    }
}

fn render_users_table(f: &mut Frame, area: Rect, users: &[User]) {
    let header = Row::new(["ID", "Name", "Points", "Created"]).style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    );
    let rows = users.iter().map(|user| {
        Row::new([
            user.short_id(),
            user.display_name().to_string(),
            user.points.to_string(),
            user.created_display(),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(card("ALL USERS", Color::Cyan));
    f.render_widget(table, area);
}
