use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::{IndicatorSnapshot, SeverityTier};
use crate::domain::{Acceleration, Direction, InstrumentSeries, TrendSpan};
use crate::models::{AxisBounds, NormalizedSeries};

/// Everything needed to compute one chart: raw series plus pre-detected candidate spans.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChartRequest {
    pub primary: InstrumentSeries,
    /// Benchmark drawn against the primary series (e.g. an index)
    #[serde(default)]
    pub comparison: Option<InstrumentSeries>,
    /// Candidate surge / uptrend spans from the upstream detector
    #[serde(default)]
    pub candidates: Vec<TrendSpan>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_spans: Option<usize>,
    #[serde(default)]
    pub indicator_period: Option<usize>,
}

/// A consolidated span with its display emphasis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TieredSpan {
    pub span: TrendSpan,
    pub tier: SeverityTier,
    pub intensity: f64,
    pub acceleration: Acceleration,
    pub direction: Direction,
}

/// The engine's output contract to the rendering layer.
/// `primary` and `comparison` are index-aligned with `axis`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub code: String,
    pub comparison_code: Option<String>,
    pub axis: Vec<NaiveDate>,
    pub primary: NormalizedSeries,
    pub comparison: Option<NormalizedSeries>,
    pub bounds: AxisBounds,
    pub spans: Vec<TieredSpan>,
    pub indicators: Option<IndicatorSnapshot>,
}
