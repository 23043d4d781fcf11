//! Chart presentation configuration (axis padding, severity tiers, tooltip clearance)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Fraction of the data range added on each side of the y axis
    pub padding_pct: f64,
    /// Absolute padding floor, so a flat series still gets a visible band
    pub min_padding: f64,
    /// Range used when the primary series has no values at all
    pub empty_range: (f64, f64),
}

pub const AXIS: AxisConfig = AxisConfig {
    padding_pct: 0.05,
    min_padding: 1.0,
    empty_range: (-10.0, 10.0),
};

impl Default for AxisConfig {
    fn default() -> Self {
        AXIS
    }
}

/// Severity tier boundaries on |slope| (%/day).
/// `thresholds[i]` is the lower bound of tier `i + 2`; `intensities[i]` belongs to tier `i + 1`.
pub struct TierConfig {
    pub thresholds: [f64; 4],
    /// Fill opacity for each tier (0.0 = invisible, 1.0 = fully opaque)
    pub intensities: [f64; 5],
}

pub const TIERS: TierConfig = TierConfig {
    thresholds: [0.3, 0.6, 1.0, 1.5],
    intensities: [0.12, 0.20, 0.30, 0.40, 0.50],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Minimum clearance between label, pointer and viewport edge (px)
    pub margin: f64,
}

pub const TOOLTIP: TooltipConfig = TooltipConfig { margin: 12.0 };

impl Default for TooltipConfig {
    fn default() -> Self {
        TOOLTIP
    }
}
