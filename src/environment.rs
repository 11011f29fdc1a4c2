use crate::consts::cli_consts::DEFAULT_API_URL;
use reqwest::Url;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the Points API lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// API running on this machine, as started by the service's own `npm start`.
    #[default]
    Local,
    /// Any other deployment, addressed by its API base URL (usually ending in `/api`).
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL, e.g. `http://localhost:3001/api`.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the service root that serves `/` and `/health`: the API base minus its `/api` suffix.
    pub fn root_url(&self) -> String {
        let api_url = self.api_url();
        match api_url.strip_suffix("/api") {
            Some(root) => root.to_string(),
            None => api_url,
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        let invalid = || {
            format!(
                "Invalid API URL: {}. Expected 'local' or an http(s):// URL with a host.",
                s
            )
        };
        let url = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
            return Err(invalid());
        }
        Ok(Environment::Custom {
            api_url: trimmed.trim_end_matches('/').to_string(),
        })
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
