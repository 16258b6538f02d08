use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagedeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagedeck")]
#[command(author, version, about = "A paged carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to open (shorthand for `run`)
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the carousel viewer
    Run {
        /// Deck file; the built-in demo deck is shown when omitted
        file: Option<PathBuf>,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration file
    Init,
    /// Print the configuration file location
    Path,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { file }) => commands::run::run(config, file),
        None => commands::run::run(config, cli.file),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
