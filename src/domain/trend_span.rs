use std::fmt;

use anyhow::{Result, ensure};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TrendConfig;
use crate::utils::maths_utils::is_near_zero;

/// A contiguous date interval flagged as a notable rise, as produced by the
/// upstream surge / uptrend detector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrendSpan {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total gain over the span (%)
    pub total_gain: f64,
    /// Least-squares slope of the first half (%/day)
    pub slope_first: f64,
    /// Least-squares slope of the second half (%/day)
    pub slope_second: f64,
    #[serde(default)]
    pub is_accelerating: bool,
}

impl TrendSpan {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_gain: f64,
        slope_first: f64,
        slope_second: f64,
        trend: &TrendConfig,
    ) -> Result<Self> {
        ensure!(
            start_date <= end_date,
            "Trend span starts after it ends: {} > {}",
            start_date,
            end_date
        );
        let acceleration = Acceleration::classify(slope_first, slope_second, trend);
        Ok(Self {
            start_date,
            end_date,
            total_gain,
            slope_first,
            slope_second,
            is_accelerating: acceleration.is_accelerating(),
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Inclusive overlap: spans that share a single day overlap.
    pub fn overlaps(&self, other: &TrendSpan) -> bool {
        !(self.end_date < other.start_date || self.start_date > other.end_date)
    }

    pub fn acceleration(&self, trend: &TrendConfig) -> Acceleration {
        Acceleration::classify(self.slope_first, self.slope_second, trend)
    }
}

/// How the second half of a span moves relative to the first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Acceleration {
    Accelerating,
    Decelerating,
    /// First-half slope is ~0 while the second half rises, so the ratio has no meaning.
    Undefined,
}

impl Acceleration {
    pub fn classify(slope_first: f64, slope_second: f64, trend: &TrendConfig) -> Self {
        if is_near_zero(slope_first, trend.slope_epsilon) && slope_second > 0.0 {
            return Acceleration::Undefined;
        }
        let ratio = slope_second.abs() / slope_first.abs().max(trend.slope_epsilon);
        if ratio > trend.acceleration_threshold {
            Acceleration::Accelerating
        } else {
            Acceleration::Decelerating
        }
    }

    /// Undefined counts as accelerating: a flat start followed by a rise is still a surge.
    pub fn is_accelerating(&self) -> bool {
        matches!(self, Acceleration::Accelerating | Acceleration::Undefined)
    }
}

impl fmt::Display for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Acceleration::Accelerating => write!(f, "Accelerating"),
            Acceleration::Decelerating => write!(f, "Decelerating"),
            Acceleration::Undefined => write!(f, "Undefined (flat start)"),
        }
    }
}

/// Sign of a slope, kept apart from its tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Rally,
    Decline,
}

impl Direction {
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 {
            Direction::Decline
        } else {
            Direction::Rally
        }
    }
}
