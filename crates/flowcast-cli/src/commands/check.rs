//! Smoke test against a running server
//!
//! Mirrors what an operator does by hand after a deploy: hit the health
//! endpoint, post the sample company, and eyeball the result.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use flowcast_core::{sample_request, Analysis};
use tracing::debug;

use super::print_report;

/// Per-request timeout for the smoke test
const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// GET /api/health and return the JSON body
pub async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<serde_json::Value> {
    let url = endpoint(base_url, "/api/health");
    debug!(%url, "Checking health");

    let response = client
        .get(&url)
        .timeout(CHECK_TIMEOUT)
        .send()
        .await
        .with_context(|| format!("Health check request to {} failed", url))?;

    if !response.status().is_success() {
        bail!("Health check returned HTTP {}", response.status());
    }

    response.json().await.context("Health check body is not JSON")
}

/// POST the built-in sample request to /api/analyze
pub async fn post_sample(client: &reqwest::Client, base_url: &str) -> Result<Analysis> {
    let url = endpoint(base_url, "/api/analyze");
    debug!(%url, "Posting sample analysis");

    let response = client
        .post(&url)
        .timeout(CHECK_TIMEOUT)
        .json(&sample_request())
        .send()
        .await
        .with_context(|| format!("Analysis request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Analysis returned HTTP {}: {}", status, body);
    }

    response
        .json()
        .await
        .context("Analysis response did not match the expected shape")
}

/// Example request an operator can paste into a shell
pub fn curl_example(base_url: &str) -> Result<String> {
    let body = serde_json::to_string(&sample_request())?;
    Ok(format!(
        "curl -X POST {} \\\n  -H \"Content-Type: application/json\" \\\n  -d '{}'",
        endpoint(base_url, "/api/analyze"),
        body
    ))
}

pub async fn cmd_check(base_url: &str) -> Result<()> {
    println!("🧪 Flowcast smoke test against {}", base_url);

    let client = reqwest::Client::new();

    println!();
    println!("1️⃣  Health check");
    let health = check_health(&client, base_url).await?;
    println!("   ✅ {}", health);

    println!();
    println!("2️⃣  Sample analysis");
    let analysis = post_sample(&client, base_url).await?;
    println!(
        "   ✅ {} predictions, {} recommendations",
        analysis.predictions.len(),
        analysis.summary.recommendations.len()
    );
    print_report(&analysis);

    println!();
    println!("3️⃣  Try it yourself:");
    println!("{}", curl_example(base_url)?);

    println!();
    println!("✅ Smoke test passed");
    Ok(())
}
