//! Summary types produced by the forecast engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of predicted income relative to the historical total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthTrend {
    /// Predicted income more than 10% above historical
    Rising,
    Stable,
    /// Predicted income more than 10% below historical
    Falling,
}

impl GrowthTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthTrend::Rising => "Rising",
            GrowthTrend::Stable => "Stable",
            GrowthTrend::Falling => "Falling",
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GrowthTrend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rising" => Ok(GrowthTrend::Rising),
            "Stable" => Ok(GrowthTrend::Stable),
            "Falling" => Ok(GrowthTrend::Falling),
            _ => Err(format!("Unknown growth trend: {}", s)),
        }
    }
}

/// Risk carried by the predicted net flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    /// Predicted net flow is negative
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Health of the average predicted monthly net flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowHealth {
    Strong,
    Normal,
    #[serde(rename = "At-Risk")]
    AtRisk,
}

impl CashFlowHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashFlowHealth::Strong => "Strong",
            CashFlowHealth::Normal => "Normal",
            CashFlowHealth::AtRisk => "At-Risk",
        }
    }
}

impl fmt::Display for CashFlowHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CashFlowHealth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(CashFlowHealth::Strong),
            "Normal" => Ok(CashFlowHealth::Normal),
            "At-Risk" => Ok(CashFlowHealth::AtRisk),
            _ => Err(format!("Unknown cash flow health: {}", s)),
        }
    }
}

/// Totals and assessments derived from the historical and predicted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_historical_income: f64,
    pub total_historical_expense: f64,
    pub total_historical_net_flow: f64,
    pub predicted_total_income: f64,
    pub predicted_total_expense: f64,
    pub predicted_total_net_flow: f64,
    pub growth_trend: GrowthTrend,
    pub risk_level: RiskLevel,
    pub cash_flow_health: CashFlowHealth,
    /// Actionable advice, in rule order. Never empty.
    pub recommendations: Vec<String>,
}
