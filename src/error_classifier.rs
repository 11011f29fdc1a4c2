use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed API call.
    pub fn classify(&self, error: &ApiError) -> LogLevel {
        match (error.status(), error) {
            // Server-side trouble, usually temporary
            (Some(status), _) if (500..=599).contains(&status) => LogLevel::Warn,

            // Rejected request: bad input or a user that no longer exists
            (Some(_), _) => LogLevel::Error,

            // Garbled response body
            (None, ApiError::Decode(_)) => LogLevel::Error,

            // API down or unreachable
            (None, _) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
