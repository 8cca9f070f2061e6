//! Growth rate estimation
//!
//! Averages the period-over-period relative change of one metric and clamps
//! the result to the configured monthly floor/ceiling so a single outlier
//! month cannot dominate the projection.

use crate::config::ForecastConfig;
use crate::models::MonthlyRecord;

/// Which side of the ledger to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Income,
    Expense,
}

impl Metric {
    pub fn value(&self, record: &MonthlyRecord) -> f64 {
        match self {
            Metric::Income => record.income,
            Metric::Expense => record.expense,
        }
    }
}

/// Average monthly growth rate of `metric` across `history`
///
/// Periods whose previous value is not strictly positive are skipped. With
/// fewer than two records, or no usable period, the configured default rate
/// is returned.
pub fn growth_rate(history: &[MonthlyRecord], metric: Metric, config: &ForecastConfig) -> f64 {
    if history.len() < 2 {
        return config.default_growth_rate;
    }

    let (total, periods) = history
        .windows(2)
        .map(|pair| (metric.value(&pair[0]), metric.value(&pair[1])))
        .filter(|(previous, _)| *previous > 0.0)
        .fold((0.0, 0usize), |(total, periods), (previous, current)| {
            (total + (current - previous) / previous, periods + 1)
        });

    if periods == 0 {
        return config.default_growth_rate;
    }

    (total / periods as f64).clamp(config.min_growth_rate, config.max_growth_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(incomes: &[f64]) -> Vec<MonthlyRecord> {
        incomes
            .iter()
            .map(|&v| MonthlyRecord::new("January", v, v / 2.0))
            .collect()
    }

    #[test]
    fn test_default_rate_for_short_history() {
        let config = ForecastConfig::default();
        assert_eq!(growth_rate(&[], Metric::Income, &config), 0.02);
        assert_eq!(growth_rate(&series(&[100.0]), Metric::Income, &config), 0.02);
    }

    #[test]
    fn test_default_rate_when_no_valid_period() {
        let config = ForecastConfig::default();
        let history = series(&[0.0, 0.0, 50.0]);
        // 0 -> 0 and 0 -> 50 both have a zero denominator
        assert_eq!(growth_rate(&history, Metric::Income, &config), 0.02);
    }

    #[test]
    fn test_average_of_valid_periods() {
        let config = ForecastConfig::default();
        // +10%, then -10%
        let history = series(&[100.0, 110.0, 99.0]);
        let rate = growth_rate(&history, Metric::Income, &config);
        assert!(rate.abs() < 1e-12);
    }

    #[test]
    fn test_skips_zero_denominator_periods() {
        let config = ForecastConfig::default();
        // 100 -> 0 is -100% (valid), 0 -> 80 is skipped, 80 -> 88 is +10%
        let history = series(&[100.0, 0.0, 80.0, 88.0]);
        let rate = growth_rate(&history, Metric::Income, &config);
        // (-1.0 + 0.1) / 2 clamps to the floor
        assert_eq!(rate, -0.20);
    }

    #[test]
    fn test_clamps_to_ceiling() {
        let config = ForecastConfig::default();
        let history = series(&[100.0, 300.0, 900.0]);
        assert_eq!(growth_rate(&history, Metric::Income, &config), 0.30);
    }

    #[test]
    fn test_metric_selects_field() {
        let config = ForecastConfig::default();
        let history = vec![
            MonthlyRecord::new("March", 100.0, 200.0),
            MonthlyRecord::new("April", 105.0, 220.0),
        ];
        let income = growth_rate(&history, Metric::Income, &config);
        let expense = growth_rate(&history, Metric::Expense, &config);
        assert!((income - 0.05).abs() < 1e-12);
        assert!((expense - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_always_within_bounds() {
        let config = ForecastConfig::default();
        let shapes: [&[f64]; 4] = [
            &[1.0, 1000.0],
            &[1000.0, 1.0],
            &[5.0, 0.0, 5.0, 0.0, 5.0],
            &[100.0, 101.0, 250.0, 3.0, 7.0],
        ];
        for shape in shapes {
            let rate = growth_rate(&series(shape), Metric::Income, &config);
            assert!((-0.20..=0.30).contains(&rate), "rate {} out of bounds", rate);
        }
    }

    #[test]
    fn test_respects_configured_bounds() {
        let config = ForecastConfig {
            max_growth_rate: 0.05,
            ..ForecastConfig::default()
        };
        let history = series(&[100.0, 200.0]);
        assert_eq!(growth_rate(&history, Metric::Income, &config), 0.05);
    }
}
