//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::api::PointsClient;
use crate::dashboard::Dashboard;
use crate::environment::Environment;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// # Arguments
/// * `environment` - Which Points API to talk to
/// * `with_background` - Whether to enable background colors
///
/// # Returns
/// * `Ok(())` - The user quit the dashboard
/// * `Err` - Terminal setup or drawing failed
pub async fn run_tui_mode(
    environment: Environment,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &environment.api_url());
    let client = PointsClient::new(environment)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(Dashboard::new(Box::new(client)), with_background);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();

    Ok(())
}
