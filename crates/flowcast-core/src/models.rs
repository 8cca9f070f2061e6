//! Domain models for Flowcast

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::forecast::Summary;

/// Maximum number of historical months accepted in one request (100 years)
pub const MAX_HISTORY_MONTHS: usize = 1200;

/// Largest income or expense accepted for a single month. Keeps every
/// forecast and summary total finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// Calendar month names, in calendar order. Record labels are matched
/// against this table exactly.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Zero-based position in the calendar (January = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month at a zero-based calendar position, wrapping past December
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Look up a month by its exact name; unknown labels yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|m| *m == name)
            .map(Self::from_index)
    }

    pub fn as_str(&self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown month: {}", s))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round a currency amount to cents
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One month of income and expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month label (see [`MONTH_NAMES`])
    pub month: String,
    pub income: f64,
    pub expense: f64,
    /// Income minus expense. Recomputed on intake, never trusted from input.
    #[serde(default)]
    pub net_flow: f64,
}

impl MonthlyRecord {
    /// Create a record with its net flow derived from income and expense
    pub fn new(month: impl Into<String>, income: f64, expense: f64) -> Self {
        Self {
            month: month.into(),
            income,
            expense,
            net_flow: income - expense,
        }
    }

    /// A zero-valued record, used for forecasts over an empty history
    pub fn zero(month: impl Into<String>) -> Self {
        Self::new(month, 0.0, 0.0)
    }
}

/// Basic company information, echoed back unchanged in the analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub monthly_avg_income: f64,
    pub monthly_avg_expense: f64,
}

/// Input to an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company: CompanyProfile,
    pub historical_data: Vec<MonthlyRecord>,
    /// Date the forecast month labels count forward from. Defaults to today
    /// at the HTTP boundary when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

impl AnalysisRequest {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON request file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Reject requests the engine should never see
    pub fn validate(&self) -> Result<()> {
        if self.historical_data.is_empty() {
            return Err(Error::InvalidData("Historical data is required".into()));
        }

        if self.historical_data.len() > MAX_HISTORY_MONTHS {
            return Err(Error::InvalidData(format!(
                "Historical data is limited to {} months (got {})",
                MAX_HISTORY_MONTHS,
                self.historical_data.len()
            )));
        }

        for (i, record) in self.historical_data.iter().enumerate() {
            for (field, value) in [("income", record.income), ("expense", record.expense)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidData(format!(
                        "historical_data[{}].{} must be a non-negative amount (got {})",
                        i, field, value
                    )));
                }
                if value > MAX_AMOUNT {
                    return Err(Error::InvalidData(format!(
                        "historical_data[{}].{} exceeds the maximum amount of {} (got {})",
                        i, field, MAX_AMOUNT, value
                    )));
                }
            }
        }

        Ok(())
    }

    /// Copy of this request with every net flow re-derived from income and expense
    pub fn with_recomputed_net_flow(&self) -> Self {
        let mut request = self.clone();
        for record in &mut request.historical_data {
            record.net_flow = record.income - record.expense;
        }
        request
    }
}

/// Complete analysis returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub company: CompanyProfile,
    pub historical_data: Vec<MonthlyRecord>,
    pub predictions: Vec<MonthlyRecord>,
    pub summary: Summary,
    pub created_at: DateTime<Utc>,
}
