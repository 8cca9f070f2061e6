//! Offline analysis commands (analyze, sample)

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use flowcast_core::{sample_request, Analysis, AnalysisRequest, FinancialAnalyzer};

use super::{format_money, load_config};

/// Parse a `YYYY-MM-DD` anchor date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Read and validate a request file
pub fn load_request(path: &Path) -> Result<AnalysisRequest> {
    let request = AnalysisRequest::from_file(path)
        .with_context(|| format!("Failed to load request {}", path.display()))?;
    request.validate()?;
    Ok(request.with_recomputed_net_flow())
}

/// Analyze a request, labelling from `as_of`, then the request's own
/// anchor, then today
pub fn run_analysis(
    analyzer: &FinancialAnalyzer,
    request: &AnalysisRequest,
    as_of: Option<NaiveDate>,
) -> Analysis {
    let anchor = as_of
        .or(request.as_of)
        .unwrap_or_else(|| Utc::now().date_naive());
    analyzer.analyze(request, anchor)
}

pub fn cmd_analyze(
    file: &Path,
    as_of: Option<&str>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let as_of = as_of.map(parse_date).transpose()?;
    let analyzer = FinancialAnalyzer::new(load_config(config_path)?);
    let request = load_request(file)?;

    let analysis = run_analysis(&analyzer, &request, as_of);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }

    Ok(())
}

pub fn cmd_sample() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&sample_request())?);
    Ok(())
}

/// Print an analysis as a human-readable report
pub fn print_report(analysis: &Analysis) {
    let summary = &analysis.summary;

    println!();
    println!(
        "📊 Cash-Flow Forecast: {} ({})",
        analysis.company.name, analysis.company.sector
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:<12} {:>18} {:>18} {:>18}",
        "", "Income", "Expense", "Net Flow"
    );
    println!(
        "   {:<12} {:>18} {:>18} {:>18}",
        "Historical",
        format_money(summary.total_historical_income),
        format_money(summary.total_historical_expense),
        format_money(summary.total_historical_net_flow)
    );
    println!(
        "   {:<12} {:>18} {:>18} {:>18}",
        "Predicted",
        format_money(summary.predicted_total_income),
        format_money(summary.predicted_total_expense),
        format_money(summary.predicted_total_net_flow)
    );

    println!();
    println!("   Next 6 months:");
    for p in &analysis.predictions {
        let marker = if p.net_flow < 0.0 { "⚠️ " } else { "  " };
        println!(
            "   {}{:<10} {:>18} {:>18} {:>18}",
            marker,
            p.month,
            format_money(p.income),
            format_money(p.expense),
            format_money(p.net_flow)
        );
    }

    println!();
    println!("   Growth trend:     {}", summary.growth_trend);
    println!("   Risk level:       {}", summary.risk_level);
    println!("   Cash-flow health: {}", summary.cash_flow_health);

    println!();
    println!("   Recommendations:");
    for rec in &summary.recommendations {
        println!("   • {}", rec);
    }
}
