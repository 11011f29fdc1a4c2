//! Page and view state
//!
//! `Page` is the navigation choice; `View` is that page plus the data it was
//! rendered from. Views are rebuilt from fresh API responses on every visit.

use crate::dashboard::{Dashboard, StatusReport};
use crate::models::User;
use strum::IntoEnumIterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Page {
    #[strum(to_string = "Users Dashboard")]
    UsersDashboard,
    #[strum(to_string = "Add User")]
    AddUser,
    #[strum(to_string = "Manage Points")]
    ManagePoints,
    #[strum(to_string = "API Status")]
    ApiStatus,
}

impl Page {
    pub fn index(self) -> usize {
        Page::iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::iter().nth(index)
    }

    pub fn next(self) -> Page {
        Page::from_index((self.index() + 1) % Page::iter().len()).unwrap_or(self)
    }

    pub fn previous(self) -> Page {
        let count = Page::iter().len();
        Page::from_index((self.index() + count - 1) % count).unwrap_or(self)
    }

    /// Page selected by a `1`..`4` key press.
    pub fn from_hotkey(c: char) -> Option<Page> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Page::from_index)
    }
}

/// Users Dashboard: `None` when the list could not be fetched.
#[derive(Debug, Clone, Default)]
pub struct UsersView {
    pub users: Option<Vec<User>>,
}

#[derive(Debug, Clone, Default)]
pub struct AddUserForm {
    pub name: String,
    pub created: Option<User>,
}

/// Which points form receives typed digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointsField {
    Set,
    Add,
}

#[derive(Debug, Clone)]
pub struct ManagePointsView {
    pub users: Option<Vec<User>>,
    pub selected: usize,
    pub focus: PointsField,
    pub set_input: String,
    pub add_input: String,
    /// Delete was requested and awaits an explicit yes.
    pub pending_delete: bool,
    pub last_updated: Option<User>,
}

impl ManagePointsView {
    pub fn new(users: Option<Vec<User>>) -> Self {
        let mut view = Self {
            users,
            selected: 0,
            focus: PointsField::Set,
            set_input: String::new(),
            add_input: String::new(),
            pending_delete: false,
            last_updated: None,
        };
        view.reset_inputs();
        view
    }

    /// Swaps in a freshly fetched list, keeping the same user selected when it still exists.
    pub fn replace_users(&mut self, users: Option<Vec<User>>) {
        let selected_id = self.selected_user().map(|u| u.id.clone());
        self.users = users;
        let count = self.user_count();
        self.selected = selected_id
            .and_then(|id| {
                self.users
                    .as_ref()
                    .and_then(|list| list.iter().position(|u| u.id == id))
            })
            .unwrap_or_else(|| self.selected.min(count.saturating_sub(1)));
        self.pending_delete = false;
        self.reset_inputs();
    }

    fn user_count(&self) -> usize {
        self.users.as_ref().map_or(0, Vec::len)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.as_ref()?.get(self.selected)
    }

    pub fn current_points(&self) -> i64 {
        self.selected_user().map_or(0, |u| u.points)
    }

    /// Set field starts at the current balance, Add field at zero.
    fn reset_inputs(&mut self) {
        self.set_input = self.current_points().to_string();
        self.add_input = "0".to_string();
    }

    pub fn select_next(&mut self) {
        let count = self.user_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
            self.reset_inputs();
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.user_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
            self.reset_inputs();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PointsField::Set => PointsField::Add,
            PointsField::Add => PointsField::Set,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            PointsField::Set => &mut self.set_input,
            PointsField::Add => &mut self.add_input,
        }
    }

    /// Accepts digits anywhere and a minus sign only as the first character.
    pub fn type_char(&mut self, c: char) {
        let input = self.focused_input_mut();
        if input == "0" && c.is_ascii_digit() {
            input.clear();
        }
        if c.is_ascii_digit() || (c == '-' && input.is_empty()) {
            input.push(c);
        }
    }
}

/// A page together with the data it shows.
#[derive(Debug, Clone)]
pub enum View {
    Users(UsersView),
    AddUser(AddUserForm),
    ManagePoints(ManagePointsView),
    ApiStatus(StatusReport),
}

impl View {
    /// Builds the view for `page`, fetching whatever it displays.
    pub async fn load(page: Page, dashboard: &mut Dashboard) -> View {
        match page {
            Page::UsersDashboard => View::Users(UsersView {
                users: dashboard.list_users().await,
            }),
            Page::AddUser => View::AddUser(AddUserForm::default()),
            Page::ManagePoints => {
                View::ManagePoints(ManagePointsView::new(dashboard.list_users().await))
            }
            Page::ApiStatus => View::ApiStatus(dashboard.api_status().await),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            View::Users(_) => Page::UsersDashboard,
            View::AddUser(_) => Page::AddUser,
            View::ManagePoints(_) => Page::ManagePoints,
            View::ApiStatus(_) => Page::ApiStatus,
        }
    }

    /// Whether `c` is typed into a field on this page rather than treated as a shortcut.
    pub fn captures_char(&self, c: char) -> bool {
        match self {
            View::AddUser(_) => true,
            View::ManagePoints(_) => c.is_ascii_digit() || c == '-',
            View::Users(_) | View::ApiStatus(_) => false,
        }
    }
}
