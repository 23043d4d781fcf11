//! Trend analysis configuration

use serde::{Deserialize, Serialize};

/// Settings for slope / acceleration classification and normalization guards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    // |slope_second| / |slope_first| above this marks a span as accelerating
    pub acceleration_threshold: f64,
    // First-half slopes (%/day) below this magnitude make the acceleration ratio undefined
    pub slope_epsilon: f64,
    // Values below this magnitude are never used as a rebasing base
    pub base_epsilon: f64,
    // Lookback (in points) for the indicator snapshot. ~1 month of trading days
    pub indicator_period: usize,
}

pub const TREND: TrendConfig = TrendConfig {
    acceleration_threshold: 1.3,
    slope_epsilon: 0.01,
    base_epsilon: 1e-9,
    indicator_period: 20,
};

impl Default for TrendConfig {
    fn default() -> Self {
        TREND
    }
}
