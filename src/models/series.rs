use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// AlignedSeries: continuous daily series after forward-fill
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AlignedPoint {
    pub date: NaiveDate,
    /// `None` only after projection onto a wider date axis (days before the first value).
    pub value: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AlignedSeries {
    pub points: Vec<AlignedPoint>,
}

impl AlignedSeries {
    pub fn new(points: Vec<AlignedPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .and_then(|idx| self.points[idx].value)
    }

    /// Re-index this series onto `axis` (sorted ascending), one point per axis date.
    /// Axis dates this series lacks carry its last known value forward; only dates before
    /// its first value become `None`. Two series projected onto the same axis stay
    /// index-aligned for joint rendering.
    pub fn project_onto(&self, axis: &[NaiveDate]) -> AlignedSeries {
        let mut source = self.points.iter().peekable();

        let (_, points) = axis.iter().fold(
            (None::<f64>, Vec::with_capacity(axis.len())),
            |(last_known, mut out), &date| {
                let mut current = last_known;
                while let Some(point) = source.next_if(|p| p.date <= date) {
                    current = point.value.or(current);
                }
                out.push(AlignedPoint {
                    date,
                    value: current,
                });
                (current, out)
            },
        );

        AlignedSeries { points }
    }
}

// ============================================================================
// NormalizedSeries: percent change from the first available value
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    pub percent: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NormalizedSeries {
    pub points: Vec<NormalizedPoint>,
}

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All non-null percent values, in order.
    pub fn known_percents(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.percent).collect()
    }

    pub fn first_known(&self) -> Option<&NormalizedPoint> {
        self.points.iter().find(|p| p.percent.is_some())
    }

}

/// Whether a series drives the chart's y axis or is only drawn against it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum SeriesRole {
    #[default]
    Primary,
    /// Benchmark / reference series. Never influences axis bounds.
    Comparison,
}

/// Y-axis display range. Always satisfies `min <= 0 <= max`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn series(values: &[(u32, f64)]) -> AlignedSeries {
        AlignedSeries::new(
            values
                .iter()
                .map(|&(d, v)| AlignedPoint {
                    date: day(d),
                    value: Some(v),
                })
                .collect(),
        )
    }

    #[test]
    fn projection_pads_missing_dates_with_none() {
        let s = series(&[(3, 1.0), (4, 1.1)]);
        let axis = vec![day(1), day(2), day(3), day(4)];
        let projected = s.project_onto(&axis);

        assert_eq!(projected.len(), 4);
        assert_eq!(projected.dates(), axis);
        assert_eq!(projected.points[0].value, None);
        assert_eq!(projected.points[1].value, None);
        assert_eq!(projected.points[2].value, Some(1.0));
        assert_eq!(projected.points[3].value, Some(1.1));
    }

    #[test]
    fn projection_carries_value_across_dates_the_series_lacks() {
        // Weekday-only series projected onto an axis that includes a Saturday
        let s = series(&[(4, 3500.0), (5, 3510.0), (8, 3520.0)]);
        let axis = vec![day(3), day(4), day(5), day(6), day(8)];
        let projected = s.project_onto(&axis);

        let values: Vec<_> = projected.points.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            vec![None, Some(3500.0), Some(3510.0), Some(3510.0), Some(3520.0)]
        );
    }

    #[test]
    fn value_lookup_by_date() {
        let s = series(&[(3, 1.0), (4, 1.1), (5, 1.2)]);
        assert_eq!(s.value_on(day(4)), Some(1.1));
        assert_eq!(s.value_on(day(9)), None);
    }

    #[test]
    fn known_percent_helpers_skip_nulls() {
        let n = NormalizedSeries {
            points: vec![
                NormalizedPoint { date: day(1), percent: None },
                NormalizedPoint { date: day(2), percent: Some(0.0) },
                NormalizedPoint { date: day(3), percent: Some(4.5) },
                NormalizedPoint { date: day(4), percent: None },
            ],
        };
        assert_eq!(n.known_percents(), vec![0.0, 4.5]);
        assert_eq!(n.first_known().unwrap().date, day(2));
    }
}
