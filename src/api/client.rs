//! Points API Client
//!
//! A JSON-over-HTTP client for the Points API: user listing, creation, point
//! updates, deletion, and the root/health probes.

use crate::api::PointsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::environment::Environment;
use crate::models::{ApiStatus, HealthStatus, NewUser, PointsMode, PointsUpdate, User};
use log::{debug, warn};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("points-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PointsClient {
    client: Client,
    environment: Environment,
}

impl PointsClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url(),
            endpoint.trim_start_matches('/')
        )
    }

    fn build_root_url(&self, endpoint: &str) -> String {
        let root = self.environment.root_url();
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            root
        } else {
            format!("{}/{}", root, endpoint)
        }
    }

    fn user_points_endpoint(user_id: &str) -> String {
        format!("users/{}/points", urlencoding::encode(user_id))
    }

    /// Sends the request and insists on exactly `expected` as the response status.
    async fn send(request: RequestBuilder, expected: StatusCode) -> Result<Response, ApiError> {
        let response = request.send().await.inspect_err(|e| {
            warn!("Points API unreachable: {}", e);
        })?;

        debug!("{} {}", response.status(), response.url());
        if response.status() != expected {
            let err = ApiError::from_response(response).await;
            warn!("Points API returned an error: {}", err);
            return Err(err);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    /// `PATCH` overwrites the balance, `POST` increments it.
    async fn update_points(&self, user_id: &str, update: PointsUpdate) -> Result<User, ApiError> {
        debug!("{} {} points for user {}", update.mode, update.points, user_id);
        let url = self.build_url(&Self::user_points_endpoint(user_id));
        let request = match update.mode {
            PointsMode::Set => self.client.patch(url),
            PointsMode::Add => self.client.post(url),
        };
        let response = Self::send(request.json(&update), StatusCode::OK).await?;
        Self::decode_response(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Self::send(self.client.get(url), StatusCode::OK).await?;
        Self::decode_response(response).await
    }
}

#[async_trait::async_trait]
impl PointsApi for PointsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&self.build_url("users")).await
    }

    async fn create_user(&self, name: &str) -> Result<User, ApiError> {
        let body = NewUser {
            name: name.to_string(),
        };
        let request = self.client.post(self.build_url("users")).json(&body);
        let response = Self::send(request, StatusCode::CREATED).await?;
        Self::decode_response(response).await
    }

    async fn set_points(&self, user_id: &str, points: i64) -> Result<User, ApiError> {
        self.update_points(user_id, PointsUpdate::set(points)).await
    }

    async fn add_points(&self, user_id: &str, points: i64) -> Result<User, ApiError> {
        self.update_points(user_id, PointsUpdate::add(points)).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let url = self.build_url(&format!("users/{}", urlencoding::encode(user_id)));
        Self::send(self.client.delete(url), StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    async fn root_status(&self) -> Result<ApiStatus, ApiError> {
        self.get_json(&self.build_root_url("")).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(&self.build_root_url("health")).await
    }
}
