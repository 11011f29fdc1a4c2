//! Notice System
//!
//! User-visible messages produced by dashboard operations

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Notice {
    fn new(kind: NoticeKind, msg: String, log_level: LogLevel) -> Self {
        Self {
            kind,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, msg.into(), LogLevel::Info)
    }

    #[cfg(test)]
    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, msg.into(), LogLevel::Info)
    }

    /// Validation problems and degraded probes.
    pub fn warning(msg: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, msg.into(), LogLevel::Warn)
    }

    pub fn error_with_level(msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(NoticeKind::Error, msg.into(), log_level)
    }

    /// Diagnostic detail, shown only when `RUST_LOG` asks for it.
    pub fn debug(msg: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, msg.into(), LogLevel::Debug)
    }

    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn should_display(&self) -> bool {
        if self.kind != NoticeKind::Info || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_always_display() {
        assert!(Notice::warning("Please enter a name for the user").should_display());
        assert!(Notice::error_with_level("boom", LogLevel::Debug).should_display());
        assert!(Notice::success("done").should_display());
    }

    #[test]
    fn display_includes_kind_and_message() {
        let notice = Notice::info("No users found.");
        let rendered = notice.to_string();
        assert!(rendered.starts_with("Info ["));
        assert!(rendered.ends_with("No users found."));
    }
}
