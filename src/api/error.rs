//! Error handling for the Points API client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, timeout.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// The API answered with a status other than the one the operation expects.
    #[error("{status} - {message}")]
    Http { status: u16, message: String },

    /// The API answered successfully but the body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Whether the request never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Reqwest(_))
    }

    /// Status code of an HTTP error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
