//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Offline analysis of a request file, sample request output
//! - `check` - Smoke test against a running server
//! - `serve` - Web server command

pub mod analyze;
pub mod check;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use check::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};
use flowcast_core::ForecastConfig;

/// Load forecast tuning from `path`, or the embedded defaults
pub fn load_config(path: Option<&Path>) -> Result<ForecastConfig> {
    ForecastConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load forecast config from {}", p.display()),
        None => "Failed to load embedded forecast config".to_string(),
    })
}

/// Format a currency amount with thousands separators, e.g. `1,234,567.89`
pub fn format_money(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
