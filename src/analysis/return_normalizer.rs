//! Return normalization
//!
//! Rebases an aligned series to percent change from its first available value and
//! derives the y-axis display range. Only the primary series feeds the axis range, so a
//! benchmark's larger swings never flatten the primary series' visual resolution.

#[cfg(debug_assertions)]
use crate::config::PRINT_AXIS_BOUNDS;
use crate::config::{AXIS, AxisConfig, TREND, TrendConfig};
use crate::models::{AlignedSeries, AxisBounds, NormalizedPoint, NormalizedSeries, SeriesRole};
use crate::utils::maths_utils::{get_min_max, is_near_zero, pct_change};

/// Normalize with the default trend and axis settings.
pub fn normalize(
    aligned: &AlignedSeries,
    role: SeriesRole,
) -> (NormalizedSeries, Option<AxisBounds>) {
    normalize_with(aligned, role, &TREND, &AXIS)
}

pub fn normalize_with(
    aligned: &AlignedSeries,
    role: SeriesRole,
    trend: &TrendConfig,
    axis: &AxisConfig,
) -> (NormalizedSeries, Option<AxisBounds>) {
    let series = rebase(aligned, trend);
    let bounds = match role {
        SeriesRole::Primary => Some(axis_bounds(&series, axis)),
        SeriesRole::Comparison => None,
    };
    (series, bounds)
}

/// Percent change from the first usable value. One output point per input point.
/// Points before the base (and any near-zero or non-finite value) are `None`.
pub fn rebase(aligned: &AlignedSeries, trend: &TrendConfig) -> NormalizedSeries {
    let usable = |v: f64| v.is_finite() && !is_near_zero(v, trend.base_epsilon);

    let (_, points) = aligned.points.iter().fold(
        (None::<f64>, Vec::with_capacity(aligned.len())),
        |(base, mut out), point| {
            let value = point.value.filter(|&v| usable(v));
            let base = base.or(value);
            let percent = match (base, value) {
                (Some(b), Some(v)) => Some(pct_change(b, v)),
                _ => None,
            };
            out.push(NormalizedPoint {
                date: point.date,
                percent,
            });
            (base, out)
        },
    );

    NormalizedSeries { points }
}

/// Y-axis range for a primary series: data range widened to include zero, then padded.
pub fn axis_bounds(series: &NormalizedSeries, axis: &AxisConfig) -> AxisBounds {
    let (data_min, data_max) =
        get_min_max(&series.known_percents()).unwrap_or(axis.empty_range);

    let min = data_min.min(0.0);
    let max = data_max.max(0.0);
    let pad = ((max - min) * axis.padding_pct).max(axis.min_padding);

    let bounds = AxisBounds {
        min: min - pad,
        max: max + pad,
    };

    #[cfg(debug_assertions)]
    if PRINT_AXIS_BOUNDS {
        log::info!(
            "[axis] data {:.2}..{:.2} -> bounds {:.2}..{:.2}",
            data_min,
            data_max,
            bounds.min,
            bounds.max
        );
    }

    bounds
}
