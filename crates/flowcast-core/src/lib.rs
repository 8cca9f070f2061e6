//! Flowcast Core Library
//!
//! Shared functionality for the Flowcast cash-flow analysis service:
//! - Domain models (monthly records, company profile, analysis)
//! - Request validation and net-flow recomputation
//! - Forecast engine (growth, seasonality, six-month projection, summary)
//! - Forecast tuning configuration (TOML with embedded defaults)

pub mod config;
pub mod error;
pub mod forecast;
pub mod models;
pub mod sample;

pub use config::ForecastConfig;
pub use error::{Error, Result};
pub use forecast::{
    CashFlowHealth, FinancialAnalyzer, GrowthTrend, RiskLevel, Summary, FORECAST_MONTHS,
};
pub use models::{Analysis, AnalysisRequest, CompanyProfile, Month, MonthlyRecord};
pub use sample::sample_request;
