//! Points API payloads
//!
//! Typed records for everything the API sends and receives. Missing fields
//! fall back to the defaults the dashboard displays.

use crate::consts::cli_consts::SHORT_ID_LEN;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn no_message() -> String {
    "No message".to_string()
}

/// A tracked participant, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    /// `None` when the API record carries no name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// First characters of the id followed by an ellipsis, or "N/A" without an id.
    pub fn short_id(&self) -> String {
        if self.id.is_empty() {
            return "N/A".to_string();
        }
        let prefix: String = self.id.chars().take(SHORT_ID_LEN).collect();
        format!("{}...", prefix)
    }

    /// Creation time as `YYYY-MM-DD HH:MM`, or "N/A".
    pub fn created_display(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(format_timestamp)
            .unwrap_or_else(|| "N/A".to_string())
    }

    fn known_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// Name for tables and messages, "Unknown" when the record has none.
    pub fn display_name(&self) -> &str {
        self.known_name().unwrap_or(UNKNOWN)
    }

    /// Label used in the user selector. Nameless users are told apart by id.
    pub fn selector_label(&self) -> String {
        match self.known_name() {
            Some(name) => name.to_string(),
            None => {
                let prefix: String = self.id.chars().take(SHORT_ID_LEN).collect();
                format!("{} ({})", UNKNOWN, prefix)
            }
        }
    }
}

/// Formats an RFC 3339 timestamp (as emitted by `Date.toISOString`) for tables.
pub fn format_timestamp(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
}

/// How a points update is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PointsMode {
    /// Overwrite the balance (`PATCH`).
    Set,
    /// Increment the balance (`POST`).
    Add,
}

/// A points change for one user. Only `points` is sent; `mode` picks the method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct PointsUpdate {
    pub points: i64,
    #[serde(skip)]
    pub mode: PointsMode,
}

impl PointsUpdate {
    pub fn set(points: i64) -> Self {
        Self {
            points,
            mode: PointsMode::Set,
        }
    }

    pub fn add(points: i64) -> Self {
        Self {
            points,
            mode: PointsMode::Add,
        }
    }
}

/// Response of the root probe (`GET /`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default = "unknown")]
    pub status: String,
    #[serde(default = "unknown")]
    pub version: String,
    #[serde(default = "no_message")]
    pub message: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default = "unknown")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_missing_fields_use_defaults() {
        let user: User = serde_json::from_str(r#"{"id":"0f9c2d7e-aaaa"}"#).unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.display_name(), "Unknown");
        assert_eq!(user.points, 0);
        assert_eq!(user.created_display(), "N/A");
    }

    #[test]
    fn user_reads_camel_case_timestamps() {
        let user: User = serde_json::from_str(
            r#"{"id":"abc","name":"Bo","points":12,"createdAt":"2025-03-04T05:06:07.890Z","updatedAt":"2025-03-05T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(user.created_display(), "2025-03-04 05:06");
        assert_eq!(user.updated_at.as_deref(), Some("2025-03-05T00:00:00.000Z"));
    }

    #[test]
    fn unparseable_created_at_displays_na() {
        let user = User {
            id: "x".into(),
            name: Some("Cy".into()),
            points: 1,
            created_at: Some("yesterday".into()),
            updated_at: None,
        };
        assert_eq!(user.created_display(), "N/A");
    }

    #[test]
    fn nameless_user_is_labelled_by_id() {
        let user: User = serde_json::from_str(r#"{"id":"3b241101-e2bb","points":4}"#).unwrap();
        assert_eq!(user.selector_label(), "Unknown (3b241101)");
        assert_eq!(user.display_name(), "Unknown");

        let blank: User = serde_json::from_str(r#"{"id":"a1","name":"  "}"#).unwrap();
        assert_eq!(blank.selector_label(), "Unknown (a1)");

        let named: User = serde_json::from_str(r#"{"id":"a1","name":"Bo"}"#).unwrap();
        assert_eq!(named.selector_label(), "Bo");
    }

    #[test]
    fn missing_name_is_not_echoed_back() {
        let user: User = serde_json::from_str(r#"{"id":"a1"}"#).unwrap();
        let echoed = serde_json::to_value(&user).unwrap();
        assert!(echoed.get("name").is_none());
    }

    #[test]
    fn short_id_truncates_to_eight_chars() {
        let mut user: User = serde_json::from_str(
            r#"{"id":"3b241101-e2bb-4255-8caf-4136c566a962","name":"Al"}"#,
        )
        .unwrap();
        assert_eq!(user.short_id(), "3b241101...");
        user.id = "a1".into();
        assert_eq!(user.short_id(), "a1...");
        user.id.clear();
        assert_eq!(user.short_id(), "N/A");
    }

    #[test]
    fn points_update_sends_only_points() {
        let body = serde_json::to_value(PointsUpdate::add(25)).unwrap();
        assert_eq!(body, serde_json::json!({ "points": 25 }));
        assert_eq!(PointsMode::Set.to_string(), "set");
    }

    #[test]
    fn api_status_defaults() {
        let status: ApiStatus = serde_json::from_str(r#"{"status":"active"}"#).unwrap();
        assert_eq!(status.version, "Unknown");
        assert_eq!(status.message, "No message");
    }
}
