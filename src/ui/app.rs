//! Main application state and UI loop
//!
//! Contains the App struct, key handling, and the terminal event loop

use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::dashboard::{Confirmation, Dashboard, parse_points};
use crate::ui::renderer::render_page;
use crate::ui::splash::render_splash;
use crate::ui::state::{AddUserForm, ManagePointsView, Page, PointsField, View};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// One of the dashboard pages.
    Page(Box<View>),
}

/// What the event loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// Operations against the Points API.
    dashboard: Dashboard,

    /// The current screen being displayed in the application.
    screen: Screen,

    /// Whether to paint a background color
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(dashboard: Dashboard, with_background_color: bool) -> Self {
        Self {
            dashboard,
            screen: Screen::Splash,
            with_background_color,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[cfg(test)]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Switches to `page`, fetching its data anew.
    pub async fn open(&mut self, page: Page) {
        let view = View::load(page, &mut self.dashboard).await;
        self.screen = Screen::Page(Box::new(view));
    }

    async fn reload(&mut self) {
        if let Screen::Page(view) = &self.screen {
            let page = view.page();
            self.open(page).await;
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        if matches!(self.screen, Screen::Splash) {
            // Any key other than quit skips the splash screen
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return Control::Quit;
            }
            self.open(Page::UsersDashboard).await;
            return Control::Continue;
        }

        let (page, awaiting_confirmation, captured) = match &self.screen {
            Screen::Page(view) => (
                view.page(),
                matches!(view.as_ref(), View::ManagePoints(state) if state.pending_delete),
                match key.code {
                    KeyCode::Char(c) => view.captures_char(c),
                    _ => false,
                },
            ),
            Screen::Splash => return Control::Continue,
        };

        // A pending deletion consumes the next key, whatever it is.
        if !awaiting_confirmation {
            match key.code {
                KeyCode::Esc => return Control::Quit,
                KeyCode::Tab => {
                    self.open(page.next()).await;
                    return Control::Continue;
                }
                KeyCode::BackTab => {
                    self.open(page.previous()).await;
                    return Control::Continue;
                }
                KeyCode::F(5) => {
                    self.reload().await;
                    return Control::Continue;
                }
                KeyCode::Char(c) if !captured => {
                    if c == 'q' {
                        return Control::Quit;
                    }
                    if c == 'r' {
                        self.reload().await;
                        return Control::Continue;
                    }
                    if let Some(target) = Page::from_hotkey(c) {
                        self.open(target).await;
                        return Control::Continue;
                    }
                }
                _ => {}
            }
        }

        if let Screen::Page(view) = &mut self.screen {
            match view.as_mut() {
                View::AddUser(form) => handle_add_user_key(&mut self.dashboard, form, key).await,
                View::ManagePoints(state) => {
                    handle_manage_points_key(&mut self.dashboard, state, key).await
                }
                View::Users(_) | View::ApiStatus(_) => {}
            }
        }
        Control::Continue
    }
}

async fn handle_add_user_key(dashboard: &mut Dashboard, form: &mut AddUserForm, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => form.name.push(c),
        KeyCode::Backspace => {
            form.name.pop();
        }
        KeyCode::Enter => {
            form.created = dashboard.create_user(&form.name).await;
            if form.created.is_some() {
                form.name.clear();
            }
        }
        _ => {}
    }
}

async fn handle_manage_points_key(
    dashboard: &mut Dashboard,
    state: &mut ManagePointsView,
    key: KeyEvent,
) {
    let Some(user_id) = state.selected_user().map(|u| u.id.clone()) else {
        return;
    };

    if state.pending_delete {
        state.pending_delete = false;
        let confirmation = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Confirmation::Confirmed,
            _ => Confirmation::Pending,
        };
        if dashboard.delete_user(&user_id, confirmation).await {
            state.last_updated = None;
            state.replace_users(dashboard.list_users().await);
        }
        return;
    }

    match key.code {
        KeyCode::Up => state.select_previous(),
        KeyCode::Down => state.select_next(),
        KeyCode::Left | KeyCode::Right => state.toggle_focus(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => state.type_char(c),
        KeyCode::Backspace => {
            state.focused_input_mut().pop();
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => state.pending_delete = true,
        KeyCode::Enter => {
            let input = match state.focus {
                PointsField::Set => &state.set_input,
                PointsField::Add => &state.add_input,
            };
            let points = match parse_points(input) {
                Ok(points) => points,
                Err(e) => {
                    dashboard.reject(e);
                    return;
                }
            };
            let updated = match state.focus {
                PointsField::Set => dashboard.set_points(&user_id, points).await,
                PointsField::Add => dashboard.add_points(&user_id, points).await,
            };
            if let Some(user) = updated {
                state.replace_users(dashboard.list_users().await);
                state.last_updated = Some(user);
            }
        }
        _ => {}
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        terminal.draw(|f| render(f, &app))?;

        if matches!(app.screen, Screen::Splash) && splash_start.elapsed() >= splash_duration {
            app.open(Page::UsersDashboard).await;
            continue;
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key).await == Control::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if app.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }
    match &app.screen {
        Screen::Splash => render_splash(f, app.dashboard.environment()),
        Screen::Page(view) => render_page(f, view, &app.dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPointsApi;
    use crate::models::User;
    use crate::notices::NoticeKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_users() -> Vec<User> {
        vec![
            User {
                id: "a1".to_string(),
                name: Some("Bo".to_string()),
                points: 9,
                created_at: None,
                updated_at: None,
            },
            User {
                id: "b2".to_string(),
                name: Some("Al".to_string()),
                points: 5,
                created_at: None,
                updated_at: None,
            },
        ]
    }

    fn manage_points_state(app: &App) -> &ManagePointsView {
        match app.screen() {
            Screen::Page(view) => match view.as_ref() {
                View::ManagePoints(state) => state,
                other => panic!("unexpected view {:?}", other.page()),
            },
            Screen::Splash => panic!("still on splash"),
        }
    }

    #[tokio::test]
    async fn any_key_leaves_splash_for_users_page() {
        let mut api = MockPointsApi::new();
        api.expect_list_users().times(1).returning(|| Ok(sample_users()));
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        assert_eq!(app.handle_key(press(KeyCode::Enter)).await, Control::Continue);
        assert!(
            matches!(app.screen(), Screen::Page(v) if v.page() == Page::UsersDashboard)
        );
    }

    #[tokio::test]
    async fn quit_keys_stop_the_loop() {
        let mut app = App::new(Dashboard::new(Box::new(MockPointsApi::new())), false);
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))).await, Control::Quit);

        app.open(Page::AddUser).await;
        // 'q' is text on the Add User page
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))).await, Control::Continue);
        assert_eq!(app.handle_key(press(KeyCode::Esc)).await, Control::Quit);
    }

    #[tokio::test]
    async fn blank_add_user_submission_makes_no_call() {
        let mut api = MockPointsApi::new();
        api.expect_create_user().never();
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::AddUser).await;
        app.handle_key(press(KeyCode::Char(' '))).await;
        app.handle_key(press(KeyCode::Enter)).await;

        let notice = app.dashboard().latest_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
    }

    #[tokio::test]
    async fn typed_name_is_submitted() {
        let mut api = MockPointsApi::new();
        api.expect_create_user()
            .withf(|name| name == "Zed")
            .times(1)
            .returning(|name| {
                Ok(User {
                    id: "z9".to_string(),
                    name: Some(name.to_string()),
                    points: 0,
                    created_at: None,
                    updated_at: None,
                })
            });
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::AddUser).await;
        for c in "Zed".chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(press(KeyCode::Enter)).await;

        match app.screen() {
            Screen::Page(view) => match view.as_ref() {
                View::AddUser(form) => {
                    assert!(form.name.is_empty());
                    assert_eq!(form.created.as_ref().unwrap().id, "z9");
                }
                _ => panic!("expected add user view"),
            },
            Screen::Splash => panic!("still on splash"),
        }
    }

    #[tokio::test]
    async fn cancelled_delete_makes_no_call() {
        let mut api = MockPointsApi::new();
        api.expect_list_users().returning(|| Ok(sample_users()));
        api.expect_delete_user().never();
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::ManagePoints).await;
        app.handle_key(press(KeyCode::Char('d'))).await;
        assert!(manage_points_state(&app).pending_delete);

        // Neither 'q' nor Esc quits while confirmation is pending
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))).await, Control::Continue);
        assert!(!manage_points_state(&app).pending_delete);
    }

    #[tokio::test]
    async fn confirmed_delete_refreshes_the_list() {
        let mut api = MockPointsApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_list_users()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(sample_users()));
        api.expect_delete_user()
            .withf(|id| id == "a1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        api.expect_list_users()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(sample_users().split_off(1)));
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::ManagePoints).await;
        app.handle_key(press(KeyCode::Char('d'))).await;
        app.handle_key(press(KeyCode::Char('y'))).await;

        let state = manage_points_state(&app);
        assert_eq!(state.users.as_ref().unwrap().len(), 1);
        assert_eq!(state.selected_user().unwrap().id, "b2");
    }

    #[tokio::test]
    async fn typed_set_value_is_applied() {
        let mut api = MockPointsApi::new();
        api.expect_list_users().times(2).returning(|| Ok(sample_users()));
        api.expect_set_points()
            .withf(|id, points| id == "a1" && *points == 42)
            .times(1)
            .returning(|_, _| {
                Ok(User {
                    id: "a1".to_string(),
                    name: Some("Bo".to_string()),
                    points: 42,
                    created_at: None,
                    updated_at: None,
                })
            });
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::ManagePoints).await;
        app.handle_key(press(KeyCode::Backspace)).await;
        app.handle_key(press(KeyCode::Char('4'))).await;
        app.handle_key(press(KeyCode::Char('2'))).await;
        app.handle_key(press(KeyCode::Enter)).await;

        let state = manage_points_state(&app);
        assert_eq!(state.last_updated.as_ref().unwrap().points, 42);
    }

    #[tokio::test]
    async fn zero_add_amount_makes_no_call() {
        let mut api = MockPointsApi::new();
        api.expect_list_users().returning(|| Ok(sample_users()));
        api.expect_add_points().never();
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::ManagePoints).await;
        app.handle_key(press(KeyCode::Right)).await;
        app.handle_key(press(KeyCode::Enter)).await;

        assert_eq!(
            app.dashboard().latest_notice().unwrap().msg,
            "Please enter a positive number of points to add"
        );
    }

    #[tokio::test]
    async fn tab_cycles_pages_and_refetches() {
        let mut api = MockPointsApi::new();
        api.expect_list_users().times(2).returning(|| Ok(Vec::new()));
        let mut app = App::new(Dashboard::new(Box::new(api)), false);

        app.open(Page::UsersDashboard).await;
        app.handle_key(press(KeyCode::Tab)).await;
        assert!(matches!(app.screen(), Screen::Page(v) if v.page() == Page::AddUser));
        app.handle_key(press(KeyCode::Tab)).await;
        assert!(matches!(app.screen(), Screen::Page(v) if v.page() == Page::ManagePoints));
    }
}
