//! API Status page
//!
//! Root probe card, health card, and the configured base URL.

use super::{boxed_height, card};
use crate::dashboard::{HealthProbe, RootProbe, StatusReport};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

const TROUBLESHOOTING: [&str; 3] = [
    "1. Make sure the API server is running",
    "2. Check the API URL in this application",
    "3. Verify network connectivity",
];

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

/// Lines and border color of the root probe card.
fn root_card(root: &RootProbe) -> (&'static str, Color, Vec<Line<'static>>) {
    match root {
        RootProbe::Online(status) => (
            "✅ API is Online",
            Color::Green,
            vec![
                field("Status", &status.status),
                field("Version", &status.version),
                field("Message", &status.message),
            ],
        ),
        RootProbe::Error { status, body } => (
            "⚠️ API Error",
            Color::Yellow,
            vec![
                field("Status Code", &status.to_string()),
                field("Response", body),
            ],
        ),
        RootProbe::Offline { api_url, error } => {
            let mut lines = vec![
                Line::from(format!(
                    "The API doesn't appear to be running at {}",
                    api_url
                )),
                field("Error", error),
                Line::from(""),
                Line::from(Span::styled(
                    "Troubleshooting",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(TROUBLESHOOTING.iter().map(|step| Line::from(*step)));
            ("❌ API Offline", Color::LightRed, lines)
        }
    }
}

pub fn render_api_status_page(f: &mut Frame, area: Rect, report: &StatusReport) {
    let (title, color, lines) = root_card(&report.root);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(boxed_height(lines.len())),
            Constraint::Length(boxed_height(1)),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines)
            .block(card(title, color))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let health = match &report.health {
        HealthProbe::Healthy(health) => {
            Paragraph::new(field("Status", &health.status)).block(card("Health Check", Color::Green))
        }
        HealthProbe::Unavailable(error) => Paragraph::new(format!(
            "Health check endpoint not accessible ({})",
            error
        ))
        .style(Style::default().fg(Color::Yellow))
        .block(card("Health Check", Color::Yellow)),
    };
    f.render_widget(health, chunks[1]);

    f.render_widget(
        Paragraph::new(field("Current API URL", &report.api_url)),
        chunks[2],
    );
}
