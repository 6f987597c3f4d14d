//! Vela CLI - command-line client for the Vela build orchestration service

use clap::Parser;
use colored::Colorize;
use log::debug;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GetCommands, GlobalOptions, ViewCommands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Commands that never touch the server or config file
    match cli.command {
        Commands::Completion { shell } => {
            cli::completions::print_completions(shell);
            return Ok(());
        }
        Commands::Version => {
            println!("vela version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load_at(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref().unwrap_or(config.log_level()));

    match &config.source {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    let opts = GlobalOptions::new(&cli, config);

    match cli.command {
        Commands::Get(GetCommands::Repo(args)) => cli::repo::get(&opts, &args).await,
        Commands::View(ViewCommands::Build(args)) => cli::build::view(&opts, &args).await,
        Commands::View(ViewCommands::Deployment(args)) => {
            cli::deployment::view(&opts, &args).await
        }
        Commands::Completion { .. } | Commands::Version => Ok(()),
    }
}

/// Send log records to stderr, filtered by `level`
fn init_logging(level: &str) {
    env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .init();
}
