//! Page layout renderer

use super::components::{footer, header, notices};
use super::pages::{add_user, api_status, manage_points, users};
use super::state::View;
use crate::dashboard::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_page(f: &mut Frame, view: &View, dashboard: &Dashboard) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], view.page());

    match view {
        View::Users(state) => users::render_users_page(f, main_chunks[1], state),
        View::AddUser(form) => add_user::render_add_user_page(f, main_chunks[1], form),
        View::ManagePoints(state) => {
            manage_points::render_manage_points_page(f, main_chunks[1], state)
        }
        View::ApiStatus(report) => api_status::render_api_status_page(f, main_chunks[1], report),
    }

    notices::render_notices_panel(f, main_chunks[2], dashboard);
    footer::render_footer(f, main_chunks[3], view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPointsApi;
    use crate::dashboard::{HealthProbe, RootProbe, StatusReport};
    use crate::models::User;
    use crate::ui::state::{ManagePointsView, UsersView};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(view: &View) -> String {
        let dashboard = Dashboard::new(Box::new(MockPointsApi::new()));
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal
            .draw(|f| render_page(f, view, &dashboard))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn user(id: &str, name: &str, points: i64) -> User {
        User {
            id: id.to_string(),
            name: Some(name.to_string()),
            points,
            created_at: Some("2024-03-01T09:30:00.000Z".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn users_page_shows_table_and_activity() {
        let view = View::Users(UsersView {
            users: Some(vec![user("0123456789", "Alice", 30), user("abc", "Bob", 10)]),
        });
        let screen = draw(&view);
        assert!(screen.contains("ALL USERS"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("01234567..."));
        assert!(screen.contains("2024-03-01 09:30"));
        assert!(screen.contains("No activity yet."));
    }

    #[test]
    fn empty_user_list_is_explained() {
        let screen = draw(&View::Users(UsersView {
            users: Some(Vec::new()),
        }));
        assert!(screen.contains("No users found. Add some users to get started!"));

        let screen = draw(&View::ManagePoints(ManagePointsView::new(Some(Vec::new()))));
        assert!(screen.contains("No users found. Add some users first!"));
    }

    #[test]
    fn offline_status_lists_troubleshooting() {
        let report = StatusReport {
            api_url: "http://localhost:3001/api".to_string(),
            root: RootProbe::Offline {
                api_url: "http://localhost:3001/api".to_string(),
                error: "connection refused".to_string(),
            },
            health: HealthProbe::Unavailable("connection refused".to_string()),
        };
        let screen = draw(&View::ApiStatus(report));
        assert!(screen.contains("API Offline"));
        assert!(screen.contains("Make sure the API server is running"));
        assert!(screen.contains("Current API URL: http://localhost:3001/api"));
    }

    #[test]
    fn selector_scrolls_to_the_selected_user() {
        let users = (0..60)
            .map(|i| user(&format!("id-{:02}", i), &format!("user-{:02}", i), 100 - i))
            .collect();
        let mut state = ManagePointsView::new(Some(users));
        // Wraps around to the last of 60 users, far below the visible rows
        state.select_previous();

        let screen = draw(&View::ManagePoints(state));
        assert!(screen.contains("> user-59"));
        assert!(!screen.contains("user-00"));
    }
}
