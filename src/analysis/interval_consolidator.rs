//! Trend span consolidation
//!
//! Reduces overlapping candidate spans to a non-overlapping subset by greedy interval
//! scheduling that favours the most recently ending span. A nested cluster collapses to
//! its latest-ending member even when that member is the smaller span.

#[cfg(debug_assertions)]
use crate::config::PRINT_CONSOLIDATION;
use crate::domain::TrendSpan;

/// Non-overlapping subset of `candidates`, ordered by start date ascending.
pub fn consolidate(candidates: &[TrendSpan]) -> Vec<TrendSpan> {
    let mut by_recency: Vec<&TrendSpan> = candidates
        .iter()
        .filter(|span| {
            if !span.is_well_formed() {
                log::warn!(
                    "Dropping inverted trend span {} -> {}",
                    span.start_date,
                    span.end_date
                );
            }
            span.is_well_formed()
        })
        .collect();

    // Stable: equal end dates keep their original order
    by_recency.sort_by(|a, b| b.end_date.cmp(&a.end_date));

    // Every accepted span ends no earlier than the candidate, so the candidate overlaps
    // one of them exactly when it ends on or after the earliest accepted start.
    let (_, mut accepted) = by_recency.into_iter().fold(
        (None, Vec::new()),
        |(earliest_start, mut accepted), candidate| {
            let clashes = earliest_start.is_some_and(|start| candidate.end_date >= start);
            if clashes {
                return (earliest_start, accepted);
            }
            accepted.push(candidate.clone());
            (Some(candidate.start_date), accepted)
        },
    );

    // Accepted spans are disjoint and were taken latest-first
    accepted.reverse();

    #[cfg(debug_assertions)]
    if PRINT_CONSOLIDATION {
        log::info!(
            "[consolidate] kept {} of {} candidate spans",
            accepted.len(),
            candidates.len()
        );
    }

    accepted
}

/// `consolidate`, then keep at most `max_spans` from the start of the ascending list.
pub fn consolidate_capped(candidates: &[TrendSpan], max_spans: Option<usize>) -> Vec<TrendSpan> {
    let mut spans = consolidate(candidates);
    if let Some(limit) = max_spans {
        spans.truncate(limit);
    }
    spans
}
