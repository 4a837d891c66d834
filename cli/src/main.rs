// cli/src/main.rs

mod commands;
mod handlers;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use thalcare_lib::config::{load_app_config, AppConfig};
use thalcare_models::Login;

use crate::commands::{Cli, Commands};

// RUST_LOG, when set, wins over `logging.level`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let level = config.logging.level_filter()?;
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_app_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config)?;

    match cli.command {
        Commands::Dashboard { seed, catalog, at } => {
            let summary = handlers::handle_dashboard(&config, seed.as_deref(), catalog.as_deref(), at.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Login { username, password } => {
            let login = Login::new(username, password);
            if handlers::handle_login(&config, &login) {
                println!("Login accepted for {}", login.username);
            } else {
                eprintln!("Invalid username or password");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Seed { format } => {
            print!("{}", handlers::render_seed(format)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
