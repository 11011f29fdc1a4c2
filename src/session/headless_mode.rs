//! Headless mode execution
//!
//! One-shot reports printed to the console instead of the terminal dashboard.

use super::messages::print_session_starting;
use crate::api::PointsClient;
use crate::cli_messages::print_notice;
use crate::dashboard::{Dashboard, HealthProbe, RootProbe, StatusReport, top_users};
use crate::environment::Environment;
use crate::models::User;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;

const TROUBLESHOOTING: [&str; 3] = [
    "Make sure the API server is running",
    "Check the API URL in this application",
    "Verify network connectivity",
];

/// Prints every user, highest balance first.
///
/// # Returns
/// * `Ok(())` - The list was fetched (possibly empty)
/// * `Err` - The API could not be reached or answered with an error
pub async fn run_users_report(environment: Environment) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &environment.api_url());
    let mut dashboard = Dashboard::new(Box::new(PointsClient::new(environment)?));

    let users = dashboard.list_users().await;
    for notice in dashboard.drain_notices() {
        print_notice(&notice);
    }

    match users {
        None => Err(Box::from("Could not load users")),
        Some(users) if users.is_empty() => {
            print_cmd_info!("No users found.", "Add some users to get started!");
            Ok(())
        }
        Some(users) => {
            for line in users_table(&users) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Formats ranked users as aligned text rows, header first.
fn users_table(ranked: &[User]) -> Vec<String> {
    let medals = top_users(ranked);
    let mut lines = vec![format!(
        "{:<6} {:<12} {:<24} {:>10}  {}",
        "Rank", "ID", "Name", "Points", "Created"
    )];
    for (rank, user) in ranked.iter().enumerate() {
        let badge = medals
            .get(rank)
            .map(|(medal, _)| medal.symbol().to_string())
            .unwrap_or_else(|| (rank + 1).to_string());
        lines.push(format!(
            "{:<6} {:<12} {:<24} {:>10}  {}",
            badge,
            user.short_id(),
            user.display_name(),
            user.points,
            user.created_display()
        ));
    }
    lines
}

/// Probes the API and prints the status report. Never fails on an unreachable API.
pub async fn run_status_report(environment: Environment) -> Result<(), Box<dyn Error>> {
    let mut dashboard = Dashboard::new(Box::new(PointsClient::new(environment)?));
    let report = dashboard.api_status().await;
    print_status_report(&report);
    Ok(())
}

fn print_status_report(report: &StatusReport) {
    match &report.root {
        RootProbe::Online(status) => print_cmd_success!(
            "API is Online",
            "Status: {} | Version: {} | Message: {}",
            status.status,
            status.version,
            status.message
        ),
        RootProbe::Error { status, body } => print_cmd_warn!(
            "API Error",
            "Status Code: {} | Response: {}",
            status,
            body
        ),
        RootProbe::Offline { api_url, error } => {
            print_cmd_error!(
                "API Offline",
                &format!(
                    "The API doesn't appear to be running at {} ({})",
                    api_url, error
                )
            );
            for (i, step) in TROUBLESHOOTING.iter().enumerate() {
                print_cmd_info!("Troubleshooting", "{}. {}", i + 1, step);
            }
        }
    }

    match &report.health {
        HealthProbe::Healthy(health) => print_cmd_success!("Health Check", "Status: {}", health.status),
        HealthProbe::Unavailable(error) => {
            print_cmd_warn!("Health check endpoint not accessible", "{}", error)
        }
    }

    print_cmd_info!("Current API URL", "{}", report.api_url);
}
