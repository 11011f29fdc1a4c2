// Copyright (c) 2024 Nexus. All rights reserved.

mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod logging;
mod models;
mod notices;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::environment::Environment;
use crate::logging::get_rust_log_level;
use crate::session::{run_status_report, run_tui_mode, run_users_report};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Points dashboard: manage users and their point balances through the Points API
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Points API base URL, e.g. http://localhost:3001/api
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Disable background colors
        #[arg(long = "no-background-color", action = clap::ArgAction::SetFalse)]
        with_background: bool,
    },
    /// Print all users ranked by points
    Users {
        /// Points API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Print the API status report
    Status {
        /// Points API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the Points API base URL to the configuration file.
    SetApiUrl {
        /// Base URL including the /api prefix, or "local"
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the configuration file.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            with_background,
        } => {
            let environment = resolve_environment(api_url, &config_path)?;
            run_tui_mode(environment, with_background).await
        }
        Command::Users { api_url } => {
            let environment = resolve_environment(api_url, &config_path)?;
            run_users_report(environment).await
        }
        Command::Status { api_url } => {
            let environment = resolve_environment(api_url, &config_path)?;
            run_status_report(environment).await
        }
        Command::SetApiUrl { url } => {
            let environment: Environment = url.parse()?;
            Config::new(environment.api_url())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "API URL saved",
                "{} ({})",
                environment.api_url(),
                config_path.display()
            );
            Ok(())
        }
        Command::Reset => {
            println!("Clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Picks the API base URL: flag, then environment variable, then config file, then the local default.
fn resolve_environment(
    flag: Option<String>,
    config_path: &Path,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = flag {
        return Ok(url.parse()?);
    }
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        if !url.trim().is_empty() {
            return Ok(url.parse()?);
        }
    }
    if config_path.exists() {
        match Config::load_from_file(config_path).map(|c| c.environment()) {
            Ok(Ok(environment)) => return Ok(environment),
            Ok(Err(e)) => print_cmd_warn!("Ignoring saved API URL", "{}", e),
            Err(e) => print_cmd_warn!("Ignoring unreadable config file", "{}", e),
        }
    }
    Ok(Environment::default())
}
