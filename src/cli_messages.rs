//! CLI command messaging system
//!
//! Consistent console output for the headless commands and config changes.

use crate::notices::{Notice, NoticeKind};

const YELLOW: &str = "\x1b[1;33m";
const BRIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// One tagged line; details follow the title after a tab.
fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{}[{}]{} {}", color, tag, RESET, title);
    } else {
        println!("{}[{}]{} {}\t {}", color, tag, RESET, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged(YELLOW, "INFO", title, details);
}

pub fn print_warn(title: &str, details: &str) {
    print_tagged(BRIGHT_RED, "WARN", title, details);
}

/// Errors put their details on a second line.
pub fn print_error(title: &str, details: Option<&str>) {
    print_tagged(RED, "ERROR", title, "");
    if let Some(details) = details {
        print_tagged(RED, "ERROR", "Details:", details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(GREEN, "SUCCESS", title, details);
}

/// Print a dashboard notice with the prefix matching its kind.
pub fn print_notice(notice: &Notice) {
    if !notice.should_display() {
        return;
    }
    match notice.kind {
        NoticeKind::Success => print_success(&notice.msg, ""),
        NoticeKind::Info => print_info(&notice.msg, ""),
        NoticeKind::Warning => print_warn(&notice.msg, ""),
        NoticeKind::Error => print_error(&notice.msg, None),
    }
}

/// Macro for print_cmd_info! usage
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for print_cmd_warn! usage
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
