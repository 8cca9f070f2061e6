//! Forecast Engine - heuristic cash-flow projection
//!
//! Turns a chronological series of monthly income/expense records into a
//! six-month forecast and a qualitative assessment. Everything here is pure:
//! no I/O, no clock reads (the labelling anchor is passed in), no shared
//! mutable state.
//!
//! ## Pipeline
//!
//! - **Growth** - average period-over-period change, clamped
//! - **Seasonality** - per-month income multipliers
//! - **Generator** - compounds growth from the last month, applies
//!   seasonality and a fixed volatility pattern
//! - **Summary** - totals, trend/risk/health labels, recommendations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flowcast_core::forecast::FinancialAnalyzer;
//!
//! let analyzer = FinancialAnalyzer::default();
//! let analysis = analyzer.analyze(&request, today);
//! ```

pub mod analyzer;
pub mod generator;
pub mod growth;
pub mod seasonal;
pub mod summary;
pub mod types;

pub use analyzer::FinancialAnalyzer;
pub use generator::{forecast, forecast_month, volatility_factor, FORECAST_MONTHS};
pub use growth::{growth_rate, Metric};
pub use seasonal::{SeasonalFactors, MIN_SEASONAL_HISTORY};
pub use summary::{recommendations, summarize, MAINTAIN_PERFORMANCE};
pub use types::{CashFlowHealth, GrowthTrend, RiskLevel, Summary};
