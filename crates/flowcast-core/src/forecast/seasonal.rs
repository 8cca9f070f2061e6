//! Seasonal adjustment factors
//!
//! A twelve-entry multiplier table indexed by calendar month. Until a full
//! year of history exists the configured default table is used as-is; after
//! that, each observed month's factor is its average income relative to the
//! mean of the observed monthly averages.

use crate::models::{Month, MonthlyRecord};

/// History length at which factors start being derived from the data
pub const MIN_SEASONAL_HISTORY: usize = 12;

/// Per-month income multipliers, January = index 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalFactors([f64; 12]);

impl SeasonalFactors {
    /// Derive factors from `history`, falling back to `defaults` per month
    pub fn from_history(history: &[MonthlyRecord], defaults: &[f64; 12]) -> Self {
        let mut factors = *defaults;

        if history.len() < MIN_SEASONAL_HISTORY {
            return Self(factors);
        }

        let mut sums = [0.0_f64; 12];
        let mut counts = [0usize; 12];

        // Unrecognized month labels carry no seasonal signal
        for (month, income) in history
            .iter()
            .filter_map(|r| Month::from_name(&r.month).map(|m| (m, r.income)))
        {
            sums[month.index()] += income;
            counts[month.index()] += 1;
        }

        let averages: Vec<(usize, f64)> = (0..12)
            .filter(|&i| counts[i] > 0)
            .map(|i| (i, sums[i] / counts[i] as f64))
            .collect();

        if averages.is_empty() {
            return Self(factors);
        }

        let grand_mean = averages.iter().map(|(_, avg)| avg).sum::<f64>() / averages.len() as f64;
        if grand_mean <= 0.0 {
            return Self(factors);
        }

        for (i, avg) in averages {
            factors[i] = avg / grand_mean;
        }

        Self(factors)
    }

    /// Factor for a calendar month index; indices past 11 wrap
    pub fn factor(&self, month_index: usize) -> f64 {
        self.0[month_index % 12]
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }
}
