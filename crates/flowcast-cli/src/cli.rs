//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flowcast - Six-month cash-flow forecasts for small businesses
#[derive(Parser)]
#[command(name = "flowcast")]
#[command(about = "Cash-flow forecasting service for small and medium businesses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "FLOWCAST_PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1", env = "FLOWCAST_HOST")]
        host: String,

        /// Comma-separated CORS origins (any origin when unset)
        #[arg(long, env = "FLOWCAST_ALLOWED_ORIGINS")]
        allowed_origins: Option<String>,

        /// Forecast tuning file (TOML). Embedded defaults when unset.
        #[arg(short, long, env = "FLOWCAST_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Analyze a request file locally without starting a server
    Analyze {
        /// JSON file with `company` and `historical_data`
        #[arg(short, long)]
        file: PathBuf,

        /// Date forecast months are labelled from (YYYY-MM-DD).
        /// Overrides `as_of` in the file; defaults to today.
        #[arg(long)]
        as_of: Option<String>,

        /// Print the raw analysis JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Forecast tuning file (TOML)
        #[arg(short, long, env = "FLOWCAST_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Smoke-test a running server (health check + sample analysis)
    Check {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:8080")]
        url: String,
    },

    /// Print the built-in sample request as JSON
    Sample,
}
