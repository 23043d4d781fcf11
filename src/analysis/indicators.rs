//! Momentum / relative strength / volatility snapshot used to flag potential surges.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

#[cfg(debug_assertions)]
use crate::config::PRINT_INDICATORS;
use crate::utils::maths_utils::pct_change;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Signal {
    StrongOutperform,
    Outperform,
    Underperform,
    StrongMomentum,
    Uptrend,
    Downtrend,
    VolatilitySqueeze,
    VolatilityNarrowing,
}

impl Signal {
    pub fn score(&self) -> u32 {
        match self {
            Signal::StrongOutperform | Signal::StrongMomentum | Signal::VolatilitySqueeze => 2,
            Signal::Outperform | Signal::Uptrend | Signal::VolatilityNarrowing => 1,
            Signal::Underperform | Signal::Downtrend => 0,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Signal::StrongOutperform => write!(f, "Strongly outperforming benchmark"),
            Signal::Outperform => write!(f, "Slightly outperforming benchmark"),
            Signal::Underperform => write!(f, "Underperforming benchmark"),
            Signal::StrongMomentum => write!(f, "Strong upward momentum"),
            Signal::Uptrend => write!(f, "Trending up"),
            Signal::Downtrend => write!(f, "Trending down"),
            Signal::VolatilitySqueeze => write!(f, "Volatility squeeze (building up)"),
            Signal::VolatilityNarrowing => write!(f, "Volatility narrowing"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum WarningLevel {
    Low,
    Medium,
    High,
}

impl WarningLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 4 => WarningLevel::High,
            s if s >= 2 => WarningLevel::Medium,
            _ => WarningLevel::Low,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub period: usize,
    /// Gain over the window (%)
    pub momentum: f64,
    /// Benchmark gain over the same number of points (%), 0 when unavailable
    pub benchmark_return: f64,
    /// momentum - benchmark_return
    pub relative_strength: f64,
    /// Sample std-dev of daily returns (%)
    pub volatility: f64,
    /// Volatility relative to the preceding window of the same length
    pub volatility_ratio: f64,
    /// Deepest decline from a running peak within the window (%)
    pub max_drawdown: f64,
    pub signals: Vec<Signal>,
    pub score: u32,
    pub warning_level: WarningLevel,
}

/// Deepest percentage decline from a running peak. 0.0 for fewer than two prices.
pub fn max_drawdown(prices: &[f64]) -> f64 {
    let Some(&first) = prices.first() else {
        return 0.0;
    };
    let (_, deepest) = prices.iter().fold((first, 0.0_f64), |(peak, deepest), &price| {
        let peak = peak.max(price);
        let drawdown = (peak - price) / peak * 100.0;
        (peak, deepest.max(drawdown))
    });
    deepest
}

fn daily_volatility(prices: &[f64]) -> f64 {
    let returns: Vec<f64> = prices
        .iter()
        .tuple_windows()
        .map(|(&prev, &next)| next / prev - 1.0)
        .collect();
    let std_dev = returns.iter().std_dev();
    if std_dev.is_finite() { std_dev * 100.0 } else { 0.0 }
}

/// Snapshot over the last `period + 1` prices of `primary`.
/// `None` when there is not enough history (or `period < 2`).
pub fn compute_indicators(
    primary: &[f64],
    benchmark: Option<&[f64]>,
    period: usize,
) -> Option<IndicatorSnapshot> {
    let window_len = period + 1;
    if period < 2 || primary.len() < window_len {
        return None;
    }

    let window = &primary[primary.len() - window_len..];
    let momentum = pct_change(window[0], window[window.len() - 1]);

    let benchmark_return = benchmark
        .filter(|b| b.len() >= window_len)
        .map(|b| {
            let bw = &b[b.len() - window_len..];
            pct_change(bw[0], bw[bw.len() - 1])
        })
        .unwrap_or(0.0);
    let relative_strength = momentum - benchmark_return;

    let volatility = daily_volatility(window);
    let volatility_ratio = if primary.len() >= window_len * 2 {
        let end = primary.len() - window_len;
        let previous = daily_volatility(&primary[end - window_len..end]);
        if previous > 0.0 { volatility / previous } else { 1.0 }
    } else {
        1.0
    };

    let mut signals = Vec::new();
    signals.push(match relative_strength {
        rs if rs > 5.0 => Signal::StrongOutperform,
        rs if rs > 0.0 => Signal::Outperform,
        _ => Signal::Underperform,
    });
    if momentum > 10.0 {
        signals.push(Signal::StrongMomentum);
    } else if momentum > 0.0 {
        signals.push(Signal::Uptrend);
    } else if momentum < -5.0 {
        signals.push(Signal::Downtrend);
    }
    if volatility_ratio < 0.6 {
        signals.push(Signal::VolatilitySqueeze);
    } else if volatility_ratio < 0.8 {
        signals.push(Signal::VolatilityNarrowing);
    }

    let score = signals.iter().map(Signal::score).sum();
    let snapshot = IndicatorSnapshot {
        period,
        momentum,
        benchmark_return,
        relative_strength,
        volatility,
        volatility_ratio,
        max_drawdown: max_drawdown(window),
        signals,
        score,
        warning_level: WarningLevel::from_score(score),
    };

    #[cfg(debug_assertions)]
    if PRINT_INDICATORS {
        log::info!(
            "[indicators] momentum {:.2}% rs {:.2} vol {:.3} ratio {:.2} -> {:?}",
            snapshot.momentum,
            snapshot.relative_strength,
            snapshot.volatility,
            snapshot.volatility_ratio,
            snapshot.warning_level
        );
    }

    Some(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn drawdown_tracks_running_peak() {
        assert!(approx_eq(max_drawdown(&[100.0, 120.0, 90.0, 130.0, 117.0]), 25.0));
        assert!(approx_eq(max_drawdown(&[1.0, 2.0, 3.0]), 0.0));
        assert!(approx_eq(max_drawdown(&[]), 0.0));
    }

    #[test]
    fn not_enough_history_gives_none() {
        assert!(compute_indicators(&[1.0; 10], None, 20).is_none());
        assert!(compute_indicators(&[1.0; 10], None, 1).is_none());
    }

    #[test]
    fn strong_rally_against_flat_benchmark_is_high_warning() {
        // Choppy previous window, then a smooth rally of ~1%/day
        let mut prices: Vec<f64> = (0..21)
            .map(|i| 100.0 + if i % 2 == 0 { 0.0 } else { 3.0 })
            .collect();
        let start = *prices.last().unwrap();
        prices.extend((1..=21).map(|i| start * (1.0 + 0.01 * i as f64)));
        let benchmark = vec![3000.0; 42];

        let snap = compute_indicators(&prices, Some(&benchmark), 20).unwrap();
        assert!(snap.momentum > 10.0);
        assert!(approx_eq(snap.benchmark_return, 0.0));
        assert!(approx_eq(snap.relative_strength, snap.momentum));
        assert!(snap.volatility_ratio < 0.6);
        assert_eq!(
            snap.signals,
            vec![
                Signal::StrongOutperform,
                Signal::StrongMomentum,
                Signal::VolatilitySqueeze
            ]
        );
        assert_eq!(snap.score, 6);
        assert_eq!(snap.warning_level, WarningLevel::High);
    }

    #[test]
    fn falling_fund_underperforms() {
        let prices: Vec<f64> = (0..21).map(|i| 100.0 - i as f64 * 0.5).collect();
        let benchmark: Vec<f64> = (0..21).map(|i| 100.0 + i as f64 * 0.1).collect();

        let snap = compute_indicators(&prices, Some(&benchmark), 20).unwrap();
        assert!(approx_eq(snap.momentum, -10.0));
        assert!(approx_eq(snap.benchmark_return, 2.0));
        assert!(approx_eq(snap.relative_strength, -12.0));
        assert!(approx_eq(snap.volatility_ratio, 1.0));
        assert_eq!(snap.signals, vec![Signal::Underperform, Signal::Downtrend]);
        assert_eq!(snap.warning_level, WarningLevel::Low);
        assert!(approx_eq(snap.max_drawdown, 10.0));
    }

    #[test]
    fn short_benchmark_is_ignored() {
        let prices: Vec<f64> = (0..6).map(|i| 10.0 + i as f64 * 0.05).collect();
        let snap = compute_indicators(&prices, Some(&[1.0, 2.0]), 5).unwrap();
        assert!(approx_eq(snap.benchmark_return, 0.0));
        assert_eq!(snap.signals, vec![Signal::Outperform, Signal::Uptrend]);
        assert_eq!(snap.warning_level, WarningLevel::Medium);
    }
}
