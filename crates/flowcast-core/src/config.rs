//! Forecast tuning configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit TOML file (`flowcast serve --config forecast.toml`)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Any key missing from an override file keeps its default value.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/forecast.toml");

/// Growth rate used when the history has no usable period
pub const DEFAULT_GROWTH_RATE: f64 = 0.02;

/// Monthly growth floor
pub const MIN_GROWTH_RATE: f64 = -0.20;

/// Monthly growth ceiling
pub const MAX_GROWTH_RATE: f64 = 0.30;

/// Hand-tuned seasonal multipliers, January..December. Year-end peaks.
pub const DEFAULT_SEASONAL_FACTORS: [f64; 12] = [
    1.0, 0.95, 1.05, 1.1, 1.15, 1.2, // Jan-Jun
    1.25, 1.2, 1.1, 1.05, 1.0, 1.3, // Jul-Dec
];

/// Tunable parameters of the forecast engine
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub default_growth_rate: f64,
    pub min_growth_rate: f64,
    pub max_growth_rate: f64,
    pub default_seasonal_factors: [f64; 12],
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_growth_rate: DEFAULT_GROWTH_RATE,
            min_growth_rate: MIN_GROWTH_RATE,
            max_growth_rate: MAX_GROWTH_RATE,
            default_seasonal_factors: DEFAULT_SEASONAL_FACTORS,
        }
    }
}

impl ForecastConfig {
    /// Load from an override file, or the embedded defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading forecast config");
                fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            None => DEFAULT_CONFIG.to_string(),
        };

        Self::from_toml(&content)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(growth) = raw.growth {
            if let Some(rate) = growth.default_rate {
                config.default_growth_rate = rate;
            }
            if let Some(min) = growth.min_rate {
                config.min_growth_rate = min;
            }
            if let Some(max) = growth.max_rate {
                config.max_growth_rate = max;
            }
        }

        if let Some(factors) = raw.seasonality.and_then(|s| s.default_factors) {
            config.default_seasonal_factors = factors.try_into().map_err(|v: Vec<f64>| {
                Error::Config(format!(
                    "seasonality.default_factors needs 12 entries, got {}",
                    v.len()
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let rates = [
            self.default_growth_rate,
            self.min_growth_rate,
            self.max_growth_rate,
        ];
        if rates.iter().any(|r| !r.is_finite()) {
            return Err(Error::Config("growth rates must be finite".into()));
        }

        if self.min_growth_rate > self.max_growth_rate {
            return Err(Error::Config(format!(
                "growth.min_rate ({}) exceeds growth.max_rate ({})",
                self.min_growth_rate, self.max_growth_rate
            )));
        }

        if let Some(bad) = self
            .default_seasonal_factors
            .iter()
            .find(|f| !f.is_finite() || **f <= 0.0)
        {
            return Err(Error::Config(format!(
                "seasonal factors must be positive (got {})",
                bad
            )));
        }

        Ok(())
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    growth: Option<RawGrowth>,
    seasonality: Option<RawSeasonality>,
}

#[derive(Debug, Deserialize)]
struct RawGrowth {
    default_rate: Option<f64>,
    min_rate: Option<f64>,
    max_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSeasonality {
    default_factors: Option<Vec<f64>>,
}
