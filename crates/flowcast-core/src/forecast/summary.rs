//! Summary generation: totals, categorical assessments and recommendations

use crate::models::{round_money, MonthlyRecord};

use super::generator::FORECAST_MONTHS;
use super::types::{CashFlowHealth, GrowthTrend, RiskLevel, Summary};

const URGENT_CASH_FLOW: [&str; 3] = [
    "Create an urgent cash-flow plan",
    "Consider cutting non-essential expenses",
    "Explore alternative financing sources",
];

const DECLINING_REVENUE: [&str; 3] = [
    "Develop new marketing strategies",
    "Run a cost optimization review",
    "Review your product and service portfolio",
];

const STRONG_POSITION: [&str; 3] = [
    "Evaluate investment opportunities",
    "Plan growth strategies",
    "Build an emergency fund",
];

const PROFIT_SHARING: &str = "Consider a profit-sharing plan";

/// Fallback when no other rule applies
pub const MAINTAIN_PERFORMANCE: &str = "Focus on maintaining current performance";

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    income: f64,
    expense: f64,
    net_flow: f64,
}

impl Totals {
    fn of(records: &[MonthlyRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            income: acc.income + r.income,
            expense: acc.expense + r.expense,
            net_flow: acc.net_flow + r.net_flow,
        })
    }
}

impl GrowthTrend {
    /// Compare predicted income against the historical total (±10% band)
    pub fn classify(historical_income: f64, predicted_income: f64) -> Self {
        if predicted_income > historical_income * 1.1 {
            GrowthTrend::Rising
        } else if predicted_income < historical_income * 0.9 {
            GrowthTrend::Falling
        } else {
            GrowthTrend::Stable
        }
    }
}

impl RiskLevel {
    pub fn classify(historical_net_flow: f64, predicted_net_flow: f64) -> Self {
        if predicted_net_flow < 0.0 {
            RiskLevel::High
        } else if predicted_net_flow > historical_net_flow * 1.2 {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        }
    }
}

impl CashFlowHealth {
    /// Compare the average predicted month against 1.5x the historical
    /// monthly average. With no history there is no average to beat, so the
    /// result is at most `Normal`.
    pub fn classify(
        historical_net_flow: f64,
        historical_months: usize,
        predicted_net_flow: f64,
    ) -> Self {
        let predicted_avg = predicted_net_flow / FORECAST_MONTHS as f64;

        if predicted_avg < 0.0 {
            return CashFlowHealth::AtRisk;
        }

        if historical_months > 0 {
            let historical_avg = historical_net_flow / historical_months as f64;
            if predicted_avg > historical_avg * 1.5 {
                return CashFlowHealth::Strong;
            }
        }

        CashFlowHealth::Normal
    }
}

/// Build the recommendation list. Rules are independent and evaluated in a
/// fixed order; the fallback is added only when none fired.
pub fn recommendations(
    trend: GrowthTrend,
    risk: RiskLevel,
    health: CashFlowHealth,
    predicted_net_flow: f64,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if risk == RiskLevel::High {
        out.extend(URGENT_CASH_FLOW.iter().map(|s| s.to_string()));
    }

    if trend == GrowthTrend::Falling {
        out.extend(DECLINING_REVENUE.iter().map(|s| s.to_string()));
    }

    if health == CashFlowHealth::Strong {
        out.extend(STRONG_POSITION.iter().map(|s| s.to_string()));
    }

    if predicted_net_flow > 0.0 {
        out.push(PROFIT_SHARING.to_string());
    }

    if out.is_empty() {
        out.push(MAINTAIN_PERFORMANCE.to_string());
    }

    out
}

/// Summarize a historical series and its forecast
pub fn summarize(historical: &[MonthlyRecord], predicted: &[MonthlyRecord]) -> Summary {
    let hist = Totals::of(historical);
    let pred = Totals::of(predicted);

    let growth_trend = GrowthTrend::classify(hist.income, pred.income);
    let risk_level = RiskLevel::classify(hist.net_flow, pred.net_flow);
    let cash_flow_health =
        CashFlowHealth::classify(hist.net_flow, historical.len(), pred.net_flow);

    Summary {
        total_historical_income: round_money(hist.income),
        total_historical_expense: round_money(hist.expense),
        total_historical_net_flow: round_money(hist.net_flow),
        predicted_total_income: round_money(pred.income),
        predicted_total_expense: round_money(pred.expense),
        predicted_total_net_flow: round_money(pred.net_flow),
        growth_trend,
        risk_level,
        cash_flow_health,
        recommendations: recommendations(
            growth_trend,
            risk_level,
            cash_flow_health,
            pred.net_flow,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(months: usize, income: f64, expense: f64) -> Vec<MonthlyRecord> {
        (0..months)
            .map(|_| MonthlyRecord::new("July", income, expense))
            .collect()
    }

    #[test]
    fn test_growth_trend_bands() {
        assert_eq!(GrowthTrend::classify(100.0, 111.0), GrowthTrend::Rising);
        assert_eq!(GrowthTrend::classify(100.0, 110.0), GrowthTrend::Stable);
        assert_eq!(GrowthTrend::classify(100.0, 90.0), GrowthTrend::Stable);
        assert_eq!(GrowthTrend::classify(100.0, 89.0), GrowthTrend::Falling);
    }

    #[test]
    fn test_risk_level() {
        assert_eq!(RiskLevel::classify(100.0, -0.01), RiskLevel::High);
        assert_eq!(RiskLevel::classify(100.0, 121.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(100.0, 120.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(100.0, 0.0), RiskLevel::Medium);
        // A negative history makes any non-negative forecast an improvement
        assert_eq!(RiskLevel::classify(-500.0, 0.0), RiskLevel::Low);
    }

    #[test]
    fn test_cash_flow_health() {
        // Historical monthly average 100, threshold 150 per month
        assert_eq!(
            CashFlowHealth::classify(600.0, 6, 6.0 * 151.0),
            CashFlowHealth::Strong
        );
        assert_eq!(
            CashFlowHealth::classify(600.0, 6, 6.0 * 150.0),
            CashFlowHealth::Normal
        );
        assert_eq!(
            CashFlowHealth::classify(600.0, 6, -6.0),
            CashFlowHealth::AtRisk
        );
    }

    #[test]
    fn test_cash_flow_health_without_history() {
        assert_eq!(
            CashFlowHealth::classify(0.0, 0, 1_000_000.0),
            CashFlowHealth::Normal
        );
        assert_eq!(
            CashFlowHealth::classify(0.0, 0, -1.0),
            CashFlowHealth::AtRisk
        );
    }

    #[test]
    fn test_fallback_recommendation_only_when_nothing_fires() {
        let recs = recommendations(
            GrowthTrend::Stable,
            RiskLevel::Medium,
            CashFlowHealth::Normal,
            0.0,
        );
        assert_eq!(recs, vec![MAINTAIN_PERFORMANCE.to_string()]);
    }

    #[test]
    fn test_recommendations_accumulate_in_rule_order() {
        let recs = recommendations(
            GrowthTrend::Falling,
            RiskLevel::High,
            CashFlowHealth::AtRisk,
            -10.0,
        );
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0], URGENT_CASH_FLOW[0]);
        assert_eq!(recs[3], DECLINING_REVENUE[0]);
        assert!(!recs.iter().any(|r| r == MAINTAIN_PERFORMANCE));
    }

    #[test]
    fn test_strong_and_profitable() {
        let recs = recommendations(
            GrowthTrend::Rising,
            RiskLevel::Low,
            CashFlowHealth::Strong,
            10.0,
        );
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[..3], STRONG_POSITION.map(String::from));
        assert_eq!(recs[3], PROFIT_SHARING);
    }

    #[test]
    fn test_summary_totals_are_rounded() {
        let historical = vec![
            MonthlyRecord::new("May", 100.004, 0.0),
            MonthlyRecord::new("June", 200.002, 0.0),
        ];
        let summary = summarize(&historical, &flat(6, 0.0, 0.0));
        assert_eq!(summary.total_historical_income, 300.01);
        assert_eq!(summary.predicted_total_income, 0.0);
    }

    #[test]
    fn test_negative_forecast_is_high_risk() {
        let summary = summarize(&flat(6, 100.0, 50.0), &flat(6, 50.0, 100.0));
        assert_eq!(summary.risk_level, RiskLevel::High);
        assert_eq!(summary.cash_flow_health, CashFlowHealth::AtRisk);
        assert_eq!(summary.growth_trend, GrowthTrend::Falling);
        assert_eq!(summary.predicted_total_net_flow, -300.0);
        assert_eq!(summary.recommendations.len(), 6);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let historical = flat(4, 1234.56, 789.01);
        let predicted = flat(6, 1300.0, 800.0);
        let first = summarize(&historical, &predicted);
        let second = summarize(&historical, &predicted);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_history_summary_is_finite() {
        let summary = summarize(&[], &flat(6, 100.0, 40.0));
        assert_eq!(summary.total_historical_income, 0.0);
        assert_eq!(summary.cash_flow_health, CashFlowHealth::Normal);
        assert_eq!(summary.risk_level, RiskLevel::Low);
        assert!(summary.predicted_total_net_flow.is_finite());
    }
}
