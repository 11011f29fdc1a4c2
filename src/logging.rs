//! `RUST_LOG` handling.
//!
//! The level caps `log` records through `log::set_max_level` and decides which
//! diagnostic notices reach the activity panel.

use log::LevelFilter;
use std::env;

/// Directive target naming this crate, e.g. `points_dashboard=debug`.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    fn from_name(name: &str) -> Option<LogLevel> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    env::var("RUST_LOG")
        .map(|rust_log| parse_rust_log_level(&rust_log))
        .unwrap_or(LogLevel::Info)
}

/// Level for this crate. A directive naming the crate beats a bare level;
/// directives for other targets are ignored. Defaults to `Info`.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global = None;
    for directive in rust_log.split(',') {
        match directive.split_once('=') {
            Some((target, level)) if target.trim() == CRATE_TARGET => {
                if let Some(level) = LogLevel::from_name(level) {
                    return level;
                }
            }
            Some(_) => {}
            None => global = global.or_else(|| LogLevel::from_name(directive)),
        }
    }
    global.unwrap_or(LogLevel::Info)
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_parse_case_insensitively() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("WARNING"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
    }

    #[test]
    fn crate_directive_wins_over_others() {
        assert_eq!(
            parse_rust_log_level("reqwest=trace,points_dashboard=debug"),
            LogLevel::Debug
        );
        assert_eq!(
            parse_rust_log_level("warn,points_dashboard=error"),
            LogLevel::Error
        );
        // Another crate's directive says nothing about ours
        assert_eq!(parse_rust_log_level("reqwest=trace"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("hyper=debug,warn"), LogLevel::Warn);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
    }

    #[test]
    fn level_filter_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
