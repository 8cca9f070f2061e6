//! Financial analyzer - composes forecast and summary into an analysis

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::config::ForecastConfig;
use crate::models::{Analysis, AnalysisRequest, MonthlyRecord};

use super::generator::forecast;
use super::summary::summarize;

/// Stateless forecast engine. Holds only immutable tuning, so one instance
/// can be shared across any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct FinancialAnalyzer {
    config: ForecastConfig,
}

impl FinancialAnalyzer {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast the six months following `history`, labelled from `anchor`
    pub fn predict(&self, history: &[MonthlyRecord], anchor: NaiveDate) -> Vec<MonthlyRecord> {
        forecast(history, anchor, &self.config)
    }

    /// Run the full analysis for a request that has already been validated
    /// and had its net flows recomputed
    pub fn analyze(&self, request: &AnalysisRequest, anchor: NaiveDate) -> Analysis {
        let predictions = self.predict(&request.historical_data, anchor);
        let summary = summarize(&request.historical_data, &predictions);

        info!(
            company = %request.company.id,
            months = request.historical_data.len(),
            trend = %summary.growth_trend,
            risk = %summary.risk_level,
            health = %summary.cash_flow_health,
            "Analysis generated"
        );

        Analysis {
            company: request.company.clone(),
            historical_data: request.historical_data.clone(),
            predictions,
            summary,
            created_at: Utc::now(),
        }
    }
}
