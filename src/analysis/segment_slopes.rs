//! Two-segment slope analysis of a price window.
//!
//! The window is rebased to percent gain from its first price and split at `n / 2`.
//! A least-squares line is fitted to each half; comparing the halves tells whether a
//! rise is speeding up or running out of steam.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::config::TrendConfig;
use crate::domain::{RawPoint, TrendSpan, validate_raw_series};
use crate::utils::maths_utils::{linear_slope, pct_change};

/// Below this many points the halves are too short to fit.
pub const MIN_POINTS_FOR_SLOPES: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentSlopes {
    /// %/day over the first half
    pub slope_first: f64,
    /// %/day over the second half
    pub slope_second: f64,
    /// Gain from first to last price (%)
    pub total_gain: f64,
}

pub fn segment_slopes(prices: &[f64]) -> SegmentSlopes {
    let (Some(&first), Some(&last)) = (prices.first(), prices.last()) else {
        return SegmentSlopes::default();
    };
    let total_gain = pct_change(first, last);

    if prices.len() < MIN_POINTS_FOR_SLOPES {
        return SegmentSlopes {
            total_gain,
            ..Default::default()
        };
    }

    let gains: Vec<f64> = prices.iter().map(|&p| pct_change(first, p)).collect();
    let (first_half, second_half) = gains.split_at(gains.len() / 2);

    SegmentSlopes {
        slope_first: linear_slope(first_half),
        slope_second: linear_slope(second_half),
        total_gain,
    }
}

/// Build a `TrendSpan` covering `points`, with slopes and acceleration derived from them.
pub fn describe_span(points: &[RawPoint], trend: &TrendConfig) -> Result<TrendSpan> {
    validate_raw_series(points)?;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        anyhow::bail!("Cannot describe a trend span over an empty window");
    };
    ensure!(
        points.len() >= 2,
        "Trend span needs at least two points, got one on {}",
        first.date
    );

    let prices: Vec<f64> = points.iter().map(|p| p.value).collect();
    let slopes = segment_slopes(&prices);

    TrendSpan::new(
        first.date,
        last.date,
        slopes.total_gain,
        slopes.slope_first,
        slopes.slope_second,
        trend,
    )
}
