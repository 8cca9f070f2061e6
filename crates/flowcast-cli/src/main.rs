//! Flowcast CLI - Cash-flow forecasting for small businesses
//!
//! Usage:
//!   flowcast serve --port 8080          Start the web server
//!   flowcast analyze --file req.json    Analyze a request file locally
//!   flowcast check --url URL            Smoke-test a running server
//!   flowcast sample                     Print a sample request

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            allowed_origins,
            config,
        } => {
            commands::cmd_serve(&host, port, allowed_origins.as_deref(), config.as_deref()).await
        }
        Commands::Analyze {
            file,
            as_of,
            json,
            config,
        } => commands::cmd_analyze(&file, as_of.as_deref(), json, config.as_deref()),
        Commands::Check { url } => commands::cmd_check(&url).await,
        Commands::Sample => commands::cmd_sample(),
    }
}
