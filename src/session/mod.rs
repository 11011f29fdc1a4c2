pub mod headless_mode;
pub mod messages;
pub mod tui_mode;

pub use headless_mode::{run_status_report, run_users_report};
pub use tui_mode::run_tui_mode;
