use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "wagate")]
#[command(about = "WAGate CLI - inspect the gateway's event catalog and configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the webhook event names a session can subscribe to
    Events {
        /// Only list events of this category (e.g. "message", "group")
        #[arg(long)]
        category: Option<String>,
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Inspect the gateway configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show {
        /// Config file to read instead of the default location
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Load and validate the configuration
    Check {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events { category, json } => commands::events::run(category.as_deref(), json)?,
        Commands::Config { action } => match action {
            ConfigAction::Show { path } => commands::config::show(path)?,
            ConfigAction::Check { path } => commands::config::check(path)?,
        },
    }

    Ok(())
}
