use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TIERS;

/// Ordinal severity of a trend slope. Shared by surge and uptrend annotations.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
    strum_macros::EnumIter,
)]
pub enum SeverityTier {
    #[default]
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl SeverityTier {
    const ALL: [SeverityTier; 5] = [
        SeverityTier::Tier1,
        SeverityTier::Tier2,
        SeverityTier::Tier3,
        SeverityTier::Tier4,
        SeverityTier::Tier5,
    ];

    /// 1..=5
    pub fn level(&self) -> u8 {
        *self as u8 + 1
    }

    /// Display intensity (fill opacity), increasing with tier.
    pub fn intensity(&self) -> f64 {
        TIERS.intensities[*self as usize]
    }

    pub fn from_magnitude(magnitude: f64) -> Self {
        // NaN compares false against every threshold and lands in Tier1
        let idx = TIERS
            .thresholds
            .iter()
            .take_while(|&&lower| magnitude >= lower)
            .count();
        Self::ALL[idx]
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tier {}", self.level())
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SlopeTier {
    pub tier: SeverityTier,
    pub intensity: f64,
}

/// Classify a signed daily slope (%/day) by magnitude. The sign is the caller's concern.
pub fn classify_slope(slope: f64) -> SlopeTier {
    let tier = SeverityTier::from_magnitude(slope.abs());
    SlopeTier {
        tier,
        intensity: tier.intensity(),
    }
}
