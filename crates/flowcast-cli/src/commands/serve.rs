//! Server command implementation

use std::path::Path;

use anyhow::Result;
use flowcast_core::FinancialAnalyzer;
use flowcast_server::{parse_origins, ServerConfig};

use super::load_config;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    allowed_origins: Option<&str>,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Flowcast forecast server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Analyze:   POST http://{}:{}/api/analyze", host, port);
    println!("   Health:    GET  http://{}:{}/api/health", host, port);

    let forecast_config = load_config(config_path)?;
    match config_path {
        Some(path) => println!("   Tuning: {}", path.display()),
        None => println!("   Tuning: built-in defaults"),
    }

    let allowed_origins = allowed_origins.map(parse_origins).unwrap_or_default();
    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin");
    } else {
        println!("   🔒 CORS: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = ServerConfig { allowed_origins };

    flowcast_server::serve(FinancialAnalyzer::new(forecast_config), host, port, config).await?;

    Ok(())
}
