//! Calendar alignment
//!
//! Fills an irregular trading-date series into a continuous daily sequence using
//! forward-fill, so that series with different gap patterns (weekends, holidays,
//! partial history) become comparable day by day.

use anyhow::{Result, ensure};
use chrono::NaiveDate;
use itertools::Itertools;
use rayon::prelude::*;

#[cfg(debug_assertions)]
use crate::config::PRINT_ALIGNMENT;
use crate::domain::{CalendarMode, InstrumentSeries, RawPoint, validate_raw_series};
use crate::models::{AlignedPoint, AlignedSeries};
use crate::utils::TimeUtils;

/// Align `raw` onto every calendar day in `[start, end]`.
pub fn align(raw: &[RawPoint], start: NaiveDate, end: NaiveDate) -> Result<AlignedSeries> {
    align_with(raw, start, end, CalendarMode::AllDays)
}

/// Align `raw` onto the days of `[start, end]` selected by `mode`.
///
/// Days with a raw entry take that value. Days without one repeat the most recent
/// prior value. Days before the first in-range value are omitted (no back-fill).
/// Raw entries outside the range are ignored.
pub fn align_with(
    raw: &[RawPoint],
    start: NaiveDate,
    end: NaiveDate,
    mode: CalendarMode,
) -> Result<AlignedSeries> {
    ensure!(
        start <= end,
        "Alignment range is inverted: {} > {}",
        start,
        end
    );
    validate_raw_series(raw)?;

    let mut pending = raw
        .iter()
        .filter(|p| p.date >= start && p.date <= end)
        .peekable();

    let capacity = TimeUtils::days_inclusive(start, end);
    let (_, points) = TimeUtils::each_day(start, end).fold(
        (None::<f64>, Vec::with_capacity(capacity)),
        |(last_known, mut out), date| {
            let hit = pending.next_if(|p| p.date == date).map(|p| p.value);
            let current = hit.or(last_known);

            if let Some(value) = current {
                let skipped_weekend = hit.is_none()
                    && mode == CalendarMode::Weekdays
                    && TimeUtils::is_weekend(date);
                if !skipped_weekend {
                    out.push(AlignedPoint {
                        date,
                        value: Some(value),
                    });
                }
            }
            (current, out)
        },
    );

    #[cfg(debug_assertions)]
    if PRINT_ALIGNMENT {
        let ignored = raw
            .iter()
            .filter(|p| p.date < start || p.date > end)
            .count();
        log::info!(
            "[align] {} raw points -> {} days over {}..={} ({} outside range ignored)",
            raw.len(),
            points.len(),
            start,
            end,
            ignored
        );
    }

    Ok(AlignedSeries::new(points))
}

/// Union date range of several series, or `None` if every series is empty.
pub fn union_range(series: &[InstrumentSeries]) -> Option<(NaiveDate, NaiveDate)> {
    let start = series.iter().filter_map(|s| s.first_date()).min()?;
    let end = series.iter().filter_map(|s| s.last_date()).max()?;
    Some((start, end))
}

/// Align several series over a common range so related series land on the same days.
/// Defaults to the union of their own ranges. Output order matches input order.
pub fn align_together(
    series: &[InstrumentSeries],
    range: Option<(NaiveDate, NaiveDate)>,
    mode: CalendarMode,
) -> Result<Vec<AlignedSeries>> {
    let Some((start, end)) = range.or_else(|| union_range(series)) else {
        return Ok(vec![AlignedSeries::default(); series.len()]);
    };

    series
        .par_iter()
        .map(|s| {
            align_with(&s.points, start, end, mode)
                .map_err(|e| e.context(format!("Failed to align series {}", s.code)))
        })
        .collect()
}

/// Sorted, de-duplicated union of the dates of every aligned series.
pub fn shared_axis(series: &[AlignedSeries]) -> Vec<NaiveDate> {
    series
        .iter()
        .map(|s| s.points.iter().map(|p| p.date))
        .kmerge()
        .dedup()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01 is a Monday
    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn raw(values: &[(u32, f64)]) -> Vec<RawPoint> {
        values.iter().map(|&(d, v)| RawPoint::new(day(d), v)).collect()
    }

    fn values(series: &AlignedSeries) -> Vec<(NaiveDate, f64)> {
        series
            .points
            .iter()
            .map(|p| (p.date, p.value.unwrap()))
            .collect()
    }

    #[test]
    fn forward_fills_midweek_gap() {
        // Mon=100, Tue=102, Fri=110 over Mon..Fri
        let aligned = align(&raw(&[(1, 100.0), (2, 102.0), (5, 110.0)]), day(1), day(5)).unwrap();
        assert_eq!(
            values(&aligned),
            vec![
                (day(1), 100.0),
                (day(2), 102.0),
                (day(3), 102.0),
                (day(4), 102.0),
                (day(5), 110.0),
            ]
        );
    }

    #[test]
    fn leading_gap_is_not_back_filled() {
        let aligned = align(&raw(&[(3, 50.0), (4, 51.0)]), day(1), day(5)).unwrap();
        assert_eq!(aligned.dates(), vec![day(3), day(4), day(5)]);
        assert_eq!(aligned.value_on(day(5)), Some(51.0));
    }

    #[test]
    fn empty_series_gives_empty_output() {
        let aligned = align(&[], day(1), day(31)).unwrap();
        assert!(aligned.is_empty());
    }

    #[test]
    fn every_day_carries_latest_prior_value() {
        let input = raw(&[(2, 1.0), (3, 1.5), (8, 2.0), (9, 1.8), (15, 2.2)]);
        let aligned = align(&input, day(1), day(20)).unwrap();

        for point in &aligned.points {
            let expected = input
                .iter()
                .rev()
                .find(|p| p.date <= point.date)
                .map(|p| p.value);
            assert_eq!(point.value, expected, "mismatch on {}", point.date);
        }
        assert_eq!(aligned.len(), 19); // Jan 2..=20
    }

    #[test]
    fn aligning_dense_series_is_idempotent() {
        let dense = raw(&[(1, 1.0), (2, 1.1), (3, 1.2), (4, 1.15), (5, 1.3)]);
        let aligned = align(&dense, day(1), day(5)).unwrap();
        let as_raw: Vec<RawPoint> = values(&aligned)
            .into_iter()
            .map(|(d, v)| RawPoint::new(d, v))
            .collect();
        assert_eq!(as_raw, dense);
        assert_eq!(align(&as_raw, day(1), day(5)).unwrap(), aligned);
    }

    #[test]
    fn out_of_range_points_are_ignored() {
        let aligned = align(&raw(&[(1, 9.0), (4, 10.0), (10, 11.0)]), day(3), day(6)).unwrap();
        assert_eq!(aligned.dates(), vec![day(4), day(5), day(6)]);
        assert_eq!(aligned.value_on(day(6)), Some(10.0));
    }

    #[test]
    fn weekdays_mode_skips_filled_weekends_only() {
        // Fri 5th, Sat 6th has data, Sun 7th filled, Mon 8th
        let input = raw(&[(5, 1.0), (6, 1.1), (8, 1.2)]);
        let aligned = align_with(&input, day(5), day(8), CalendarMode::Weekdays).unwrap();
        assert_eq!(aligned.dates(), vec![day(5), day(6), day(8)]);
    }

    #[test]
    fn precondition_violations_fail_fast() {
        assert!(align(&raw(&[(1, 1.0)]), day(5), day(1)).is_err());
        assert!(align(&raw(&[(1, -3.0)]), day(1), day(5)).is_err());
        assert!(align(&raw(&[(3, 1.0), (2, 1.0)]), day(1), day(5)).is_err());
    }

    #[test]
    fn aligned_together_share_range_and_axis() {
        let fund = InstrumentSeries::new("110011", raw(&[(2, 1.0), (5, 1.1)]));
        let index = InstrumentSeries::new("000300", raw(&[(1, 3500.0), (3, 3520.0), (8, 3600.0)]));

        let aligned = align_together(&[fund, index], None, CalendarMode::AllDays).unwrap();
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[0].dates().first(), Some(&day(2)));
        assert_eq!(aligned[0].dates().last(), Some(&day(8)));
        assert_eq!(aligned[1].dates().first(), Some(&day(1)));

        let axis = shared_axis(&aligned);
        assert_eq!(axis, TimeUtils::each_day(day(1), day(8)).collect::<Vec<_>>());
    }

    #[test]
    fn aligning_only_empty_series_yields_empties() {
        let empty = InstrumentSeries::new("000001", vec![]);
        let aligned = align_together(&[empty.clone(), empty], None, CalendarMode::AllDays).unwrap();
        assert_eq!(aligned.len(), 2);
        assert!(aligned.iter().all(|s| s.is_empty()));
    }
}
