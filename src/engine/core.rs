#[cfg(debug_assertions)]
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;

use crate::analysis::{
    align_together, axis_bounds, classify_slope, compute_indicators, consolidate_capped,
    rebase, shared_axis, union_range,
};
#[cfg(debug_assertions)]
use crate::config::PRINT_ENGINE_TIMINGS;
use crate::config::EngineConfig;
use crate::domain::{Direction, InstrumentSeries, TrendSpan};
use crate::models::AlignedSeries;
use crate::ui::{Point, Size, TooltipPlacement, TooltipPlacer};

use super::messages::{ChartPayload, ChartRequest, TieredSpan};

/// Stateless facade over the normalization and annotation pipeline.
/// Holds only configuration, so one engine can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct TrendEngine {
    pub config: EngineConfig,
}

impl TrendEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Raw series + candidate spans -> normalized, index-aligned series, axis bounds and
    /// tiered spans.
    pub fn build_chart(&self, request: &ChartRequest) -> Result<ChartPayload> {
        #[cfg(debug_assertions)]
        let started_at = Instant::now();

        let mut inputs: Vec<InstrumentSeries> = vec![request.primary.clone()];
        inputs.extend(request.comparison.iter().cloned());

        let aligned = match self.resolve_range(request, &inputs) {
            Some(range) => align_together(&inputs, Some(range), self.config.calendar)?,
            None => vec![AlignedSeries::default(); inputs.len()],
        };
        let axis = shared_axis(&aligned);

        let trend = &self.config.trend;
        let axis_config = &self.config.axis;

        // Only the primary series drives the y axis
        let primary_aligned = aligned.first().cloned().unwrap_or_default();
        let primary = rebase(&primary_aligned.project_onto(&axis), trend);
        let bounds = axis_bounds(&primary, axis_config);

        let comparison = aligned
            .get(1)
            .map(|series| rebase(&series.project_onto(&axis), trend));

        let max_spans = request.max_spans.or(self.config.max_spans);
        let spans = self.tier_spans(&consolidate_capped(&request.candidates, max_spans));

        let period = request.indicator_period.unwrap_or(trend.indicator_period);
        let benchmark = request.comparison.as_ref().map(|s| s.values());
        let indicators =
            compute_indicators(&request.primary.values(), benchmark.as_deref(), period);

        #[cfg(debug_assertions)]
        if PRINT_ENGINE_TIMINGS {
            log::info!(
                "[engine] {} chart: {} days, {} of {} spans in {:.3}ms",
                request.primary.code,
                axis.len(),
                spans.len(),
                request.candidates.len(),
                started_at.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(ChartPayload {
            code: request.primary.code.clone(),
            comparison_code: request.comparison.as_ref().map(|s| s.code.clone()),
            axis,
            primary,
            comparison,
            bounds,
            spans,
            indicators,
        })
    }

    /// Attach tier, intensity and acceleration to each span. The classified slope is the
    /// second-half slope: the most recent pace of the move.
    pub fn tier_spans(&self, spans: &[TrendSpan]) -> Vec<TieredSpan> {
        spans
            .iter()
            .map(|span| {
                let slope_tier = classify_slope(span.slope_second);
                TieredSpan {
                    span: span.clone(),
                    tier: slope_tier.tier,
                    intensity: slope_tier.intensity,
                    acceleration: span.acceleration(&self.config.trend),
                    direction: Direction::from_slope(span.slope_second),
                }
            })
            .collect()
    }

    pub fn place_tooltip(&self, pointer: Point, label: Size, viewport: Size) -> TooltipPlacement {
        TooltipPlacer::new(self.config.tooltip.margin).place(pointer, label, viewport)
    }

    /// Explicit request bounds win; missing ends fall back to the union of the series.
    fn resolve_range(
        &self,
        request: &ChartRequest,
        inputs: &[InstrumentSeries],
    ) -> Option<(NaiveDate, NaiveDate)> {
        let union = union_range(inputs);
        let start = request.start_date.or(union.map(|(s, _)| s))?;
        let end = request.end_date.or(union.map(|(_, e)| e))?;
        Some((start, end))
    }
}
