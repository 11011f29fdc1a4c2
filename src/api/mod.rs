use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{ApiStatus, HealthStatus, User};

pub(crate) mod client;
pub use client::PointsClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Operations offered by the Points API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PointsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List every user, in the order the API keeps them.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user with zero points. Succeeds only on `201 Created`.
    async fn create_user(&self, name: &str) -> Result<User, ApiError>;

    /// Overwrite a user's point balance.
    async fn set_points(&self, user_id: &str, points: i64) -> Result<User, ApiError>;

    /// Add to a user's point balance; the API does the summation.
    async fn add_points(&self, user_id: &str, points: i64) -> Result<User, ApiError>;

    /// Delete a user. Succeeds only on `204 No Content`.
    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError>;

    /// Root probe on the service root (`GET /`).
    async fn root_status(&self) -> Result<ApiStatus, ApiError>;

    /// Health probe (`GET /health`).
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
