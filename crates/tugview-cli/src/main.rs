use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tugview_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "tugview")]
#[command(author, version, about = "A pull-to-refresh scroll view for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo TUI
    Run {
        /// Override the pull threshold in layout units
        #[arg(short = 't', long)]
        threshold: Option<f64>,
        /// Snap back on release instead of animating
        #[arg(long)]
        no_smooth: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default config file
    Init,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    // `tugview` with no subcommand starts the demo
    let command = cli.command.unwrap_or(Commands::Run {
        threshold: None,
        no_smooth: false,
    });

    match command {
        Commands::Run {
            threshold,
            no_smooth,
        } => {
            if let Some(threshold) = threshold {
                config.pull.threshold = threshold;
            }
            if no_smooth {
                config.ui.spring.smooth_enabled = false;
            }
            config.validate()?;
            commands::run::run(Arc::new(config)).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
