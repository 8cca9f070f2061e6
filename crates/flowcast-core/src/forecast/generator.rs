//! Six-month forecast generation
//!
//! Projects the last historical month forward with compounded growth,
//! seasonal adjustment (income only) and a fixed three-step volatility
//! pattern that moves income and expense in opposite directions.
//!
//! Seasonal indexing continues from the history length, while month labels
//! count forward from the caller's anchor date. The two are independent.

use chrono::{Datelike, NaiveDate};

use crate::config::ForecastConfig;
use crate::models::{round_money, Month, MonthlyRecord};

use super::growth::{growth_rate, Metric};
use super::seasonal::SeasonalFactors;

/// Number of months every forecast covers
pub const FORECAST_MONTHS: usize = 6;

/// Deterministic per-step volatility multiplier: 0.95, 1.00, 1.05, repeating
pub fn volatility_factor(step: usize) -> f64 {
    0.95 + (step % 3) as f64 * 0.05
}

/// Label for forecast step `step`: the month `step + 1` months after `anchor`
pub fn forecast_month(anchor: NaiveDate, step: usize) -> Month {
    Month::from_index(anchor.month0() as usize + step + 1)
}

/// Forecast the [`FORECAST_MONTHS`] months following `history`
///
/// An empty history yields zero-valued records rather than an error.
pub fn forecast(
    history: &[MonthlyRecord],
    anchor: NaiveDate,
    config: &ForecastConfig,
) -> Vec<MonthlyRecord> {
    let Some(last) = history.last() else {
        return (0..FORECAST_MONTHS)
            .map(|step| MonthlyRecord::zero(forecast_month(anchor, step).as_str()))
            .collect();
    };

    let income_growth = growth_rate(history, Metric::Income, config);
    let expense_growth = growth_rate(history, Metric::Expense, config);
    let seasonal = SeasonalFactors::from_history(history, &config.default_seasonal_factors);

    tracing::debug!(
        history_len = history.len(),
        income_growth,
        expense_growth,
        "Generating forecast"
    );

    (0..FORECAST_MONTHS)
        .map(|step| {
            let periods = (step + 1) as i32;
            let seasonal_factor = seasonal.factor(history.len() + step);
            let volatility = volatility_factor(step);

            let income = last.income
                * (1.0 + income_growth).powi(periods)
                * seasonal_factor
                * volatility;
            let expense = last.expense * (1.0 + expense_growth).powi(periods) * (2.0 - volatility);

            let income = round_money(income);
            let expense = round_money(expense);

            MonthlyRecord {
                month: forecast_month(anchor, step).as_str().to_string(),
                income,
                expense,
                net_flow: round_money(income - expense),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEASONAL_FACTORS;

    fn anchor(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 15).unwrap()
    }

    #[test]
    fn test_volatility_cycle() {
        assert_eq!(volatility_factor(0), 0.95);
        assert_eq!(volatility_factor(1), 1.0);
        assert!((volatility_factor(2) - 1.05).abs() < 1e-12);
        assert_eq!(volatility_factor(3), 0.95);
    }

    #[test]
    fn test_labels_wrap_year_end() {
        let labels: Vec<Month> = (0..FORECAST_MONTHS)
            .map(|step| forecast_month(anchor(2024, 10), step))
            .collect();
        assert_eq!(
            labels,
            vec![
                Month::November,
                Month::December,
                Month::January,
                Month::February,
                Month::March,
                Month::April,
            ]
        );
    }

    #[test]
    fn test_month_end_anchor_does_not_skip_months() {
        let end_of_january = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(forecast_month(end_of_january, 0), Month::February);
        assert_eq!(forecast_month(end_of_january, 1), Month::March);
    }

    #[test]
    fn test_empty_history_yields_zero_forecast() {
        let predictions = forecast(&[], anchor(2024, 3), &ForecastConfig::default());
        assert_eq!(predictions.len(), FORECAST_MONTHS);
        assert_eq!(predictions[0].month, "April");
        for p in &predictions {
            assert_eq!((p.income, p.expense, p.net_flow), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_single_record_uses_default_growth() {
        let history = vec![MonthlyRecord::new("January", 1000.0, 800.0)];
        let predictions = forecast(&history, anchor(2024, 1), &ForecastConfig::default());

        // Step 0: seasonal index 1 (February), volatility 0.95
        let expected_income = round_money(1000.0 * 1.02 * DEFAULT_SEASONAL_FACTORS[1] * 0.95);
        let expected_expense = round_money(800.0 * 1.02 * 1.05);
        assert_eq!(predictions[0].income, expected_income);
        assert_eq!(predictions[0].expense, expected_expense);
        assert_eq!(predictions[0].month, "February");
    }

    #[test]
    fn test_seasonal_index_follows_history_length() {
        // Eleven records: step 0 uses index 11 (December, the 1.3 peak)
        let history: Vec<MonthlyRecord> = (0..11)
            .map(|i| MonthlyRecord::new(Month::from_index(i).as_str(), 1000.0, 500.0))
            .collect();
        let predictions = forecast(&history, anchor(2024, 6), &ForecastConfig::default());

        // Flat history: growth 0
        assert_eq!(predictions[0].income, round_money(1000.0 * 1.3 * 0.95));
        assert_eq!(predictions[0].expense, round_money(500.0 * 1.05));
        // Step 1 wraps to January
        assert_eq!(predictions[1].income, round_money(1000.0 * 1.0 * 1.0));
    }

    #[test]
    fn test_net_flow_matches_rounded_values() {
        let history = vec![
            MonthlyRecord::new("March", 1234.567, 987.654),
            MonthlyRecord::new("April", 1301.01, 1002.02),
            MonthlyRecord::new("May", 1288.88, 1100.11),
        ];
        for p in forecast(&history, anchor(2024, 5), &ForecastConfig::default()) {
            assert_eq!(p.net_flow, round_money(p.income - p.expense));
            assert_eq!(p.income, round_money(p.income));
        }
    }

    #[test]
    fn test_zero_income_history_stays_zero() {
        let history = vec![
            MonthlyRecord::new("March", 0.0, 100.0),
            MonthlyRecord::new("April", 0.0, 100.0),
        ];
        let predictions = forecast(&history, anchor(2024, 4), &ForecastConfig::default());
        assert!(predictions.iter().all(|p| p.income == 0.0));
        assert!(predictions.iter().all(|p| p.net_flow < 0.0));
    }
}
