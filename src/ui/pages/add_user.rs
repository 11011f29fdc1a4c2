//! Add User page

use super::{boxed_height, card, json_echo};
use crate::ui::state::AddUserForm;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_add_user_page(f: &mut Frame, area: Rect, form: &AddUserForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(boxed_height(1)), Constraint::Fill(1)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(form.name.clone(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(card("USER NAME", Color::LightBlue));
    f.render_widget(input, chunks[0]);

    let body = match &form.created {
        Some(user) => Paragraph::new(json_echo(user)).block(card("CREATED USER", Color::Green)),
        None => Paragraph::new("Press [Enter] to create the user.")
            .style(Style::default().fg(Color::DarkGray))
            .block(card("", Color::DarkGray)),
    };
    f.render_widget(body, chunks[1]);
}
