use anyhow::{Result, ensure};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One valuation (e.g. NAV) on one calendar date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl RawPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A raw series keyed by its instrument code (fund code, index code, ...)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InstrumentSeries {
    pub code: String,
    pub points: Vec<RawPoint>,
}

impl InstrumentSeries {
    pub fn new(code: impl Into<String>, points: Vec<RawPoint>) -> Self {
        Self {
            code: code.into(),
            points,
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Checks the caller contract for a raw series: finite, strictly positive values
/// and strictly increasing dates.
pub fn validate_raw_series(points: &[RawPoint]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        ensure!(
            point.value.is_finite() && point.value > 0.0,
            "Raw series value must be positive, got {} on {} (index {})",
            point.value,
            point.date,
            idx
        );
    }
    for pair in points.windows(2) {
        ensure!(
            pair[0].date < pair[1].date,
            "Raw series dates must be strictly increasing: {} is followed by {}",
            pair[0].date,
            pair[1].date
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn accepts_well_formed_series() {
        let points = vec![RawPoint::new(day(1), 1.0), RawPoint::new(day(4), 1.02)];
        assert!(validate_raw_series(&points).is_ok());
        assert!(validate_raw_series(&[]).is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        let points = vec![RawPoint::new(day(1), 1.0), RawPoint::new(day(2), 0.0)];
        let err = validate_raw_series(&points).unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let nan = vec![RawPoint::new(day(1), f64::NAN)];
        assert!(validate_raw_series(&nan).is_err());
    }

    #[test]
    fn rejects_duplicate_or_unordered_dates() {
        let dup = vec![RawPoint::new(day(2), 1.0), RawPoint::new(day(2), 1.1)];
        assert!(validate_raw_series(&dup).is_err());

        let backwards = vec![RawPoint::new(day(3), 1.0), RawPoint::new(day(2), 1.1)];
        assert!(validate_raw_series(&backwards).is_err());
    }
}
