//! Dashboard Client
//!
//! Every operation the dashboard offers: one call to the Points API, with
//! client-side validation in front and a user-visible notice behind. Failures
//! never escape this layer; callers get `None`/`false` and read the notices.

use crate::api::PointsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{MAX_NOTICES, TOP_USERS_COUNT};
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::models::{ApiStatus, HealthStatus, User};
use crate::notices::Notice;
use std::collections::VecDeque;
use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name for the user")]
    BlankName,
    #[error("Points cannot be negative (got {0})")]
    NegativePoints(i64),
    #[error("Please enter a positive number of points to add")]
    NonPositiveDelta(i64),
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("Deletion not confirmed - nothing was deleted")]
    Unconfirmed,
}

/// Whether the user explicitly confirmed a destructive action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Pending,
    Confirmed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    fn for_rank(rank: usize) -> Self {
        match rank {
            0 => Medal::Gold,
            1 => Medal::Silver,
            _ => Medal::Bronze,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// Outcome of the root probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootProbe {
    Online(ApiStatus),
    /// The API answered, but not with 200.
    Error { status: u16, body: String },
    /// No usable answer at all.
    Offline { api_url: String, error: String },
}

/// Outcome of the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthProbe {
    Healthy(HealthStatus),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub api_url: String,
    pub root: RootProbe,
    pub health: HealthProbe,
}

/// Sorts by points, highest first. Equal balances keep the API's order.
pub fn rank_users(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| b.points.cmp(&a.points));
    users
}

/// The leading entries of an already ranked list, with their medals.
pub fn top_users(ranked: &[User]) -> Vec<(Medal, &User)> {
    ranked
        .iter()
        .take(TOP_USERS_COUNT)
        .enumerate()
        .map(|(rank, user)| (Medal::for_rank(rank), user))
        .collect()
}

/// Parses a points input field.
pub fn parse_points(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}

pub struct Dashboard {
    api: Box<dyn PointsApi>,
    classifier: ErrorClassifier,
    notices: VecDeque<Notice>,
}

impl Dashboard {
    pub fn new(api: Box<dyn PointsApi>) -> Self {
        Self {
            api,
            classifier: ErrorClassifier::new(),
            notices: VecDeque::new(),
        }
    }

    pub fn environment(&self) -> &Environment {
        self.api.environment()
    }

    pub fn notices(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.notices.iter()
    }

    #[cfg(test)]
    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() >= MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn reject(&mut self, error: ValidationError) {
        self.push_notice(Notice::warning(error.to_string()));
    }

    fn report_failure(&mut self, action: &str, error: &ApiError) {
        let level = self.classifier.classify(error);
        let msg = if error.is_transport() {
            format!("Error connecting to the API: {}", error)
        } else {
            format!("{}: {}", action, error)
        };
        self.push_notice(Notice::error_with_level(msg, level));
    }

    /// All users, ranked. `None` when the list could not be fetched.
    pub async fn list_users(&mut self) -> Option<Vec<User>> {
        match self.api.list_users().await {
            Ok(users) => {
                self.push_notice(Notice::debug(format!("Fetched {} users", users.len())));
                Some(rank_users(users))
            }
            Err(e) => {
                self.report_failure("Error fetching users", &e);
                None
            }
        }
    }

    pub async fn create_user(&mut self, name: &str) -> Option<User> {
        let name = name.trim();
        if name.is_empty() {
            self.reject(ValidationError::BlankName);
            return None;
        }
        match self.api.create_user(name).await {
            Ok(user) => {
                self.push_notice(Notice::success(format!(
                    "User {} created successfully!",
                    name
                )));
                Some(user)
            }
            Err(e) => {
                self.report_failure("Error creating user", &e);
                None
            }
        }
    }

    /// Overwrites the balance. Negative values never reach the API.
    pub async fn set_points(&mut self, user_id: &str, points: i64) -> Option<User> {
        if points < 0 {
            self.reject(ValidationError::NegativePoints(points));
            return None;
        }
        match self.api.set_points(user_id, points).await {
            Ok(user) => {
                self.push_notice(Notice::success(format!(
                    "Points for {} set to {}",
                    user.display_name(), points
                )));
                Some(user)
            }
            Err(e) => {
                self.report_failure("Error updating points", &e);
                None
            }
        }
    }

    /// Increments the balance by a positive delta.
    pub async fn add_points(&mut self, user_id: &str, delta: i64) -> Option<User> {
        if delta <= 0 {
            self.reject(ValidationError::NonPositiveDelta(delta));
            return None;
        }
        match self.api.add_points(user_id, delta).await {
            Ok(user) => {
                self.push_notice(Notice::success(format!(
                    "Added {} points to {}",
                    delta, user.display_name()
                )));
                Some(user)
            }
            Err(e) => {
                self.report_failure("Error updating points", &e);
                None
            }
        }
    }

    pub async fn delete_user(&mut self, user_id: &str, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Confirmed {
            self.reject(ValidationError::Unconfirmed);
            return false;
        }
        match self.api.delete_user(user_id).await {
            Ok(()) => {
                self.push_notice(Notice::success("User deleted successfully!"));
                true
            }
            Err(e) => {
                self.report_failure("Error deleting user", &e);
                false
            }
        }
    }

    /// Root and health probes. Both always run; neither failure hides the other.
    pub async fn api_status(&mut self) -> StatusReport {
        let api_url = self.environment().api_url();

        let root = match self.api.root_status().await {
            Ok(status) => RootProbe::Online(status),
            Err(ApiError::Http { status, message }) => RootProbe::Error {
                status,
                body: message,
            },
            Err(e) => RootProbe::Offline {
                api_url: api_url.clone(),
                error: e.to_string(),
            },
        };

        let health = match self.api.health().await {
            Ok(status) => HealthProbe::Healthy(status),
            Err(e) => {
                self.push_notice(Notice::warning("Health check endpoint not accessible"));
                HealthProbe::Unavailable(e.to_string())
            }
        };

        StatusReport {
            api_url,
            root,
            health,
        }
    }
}
