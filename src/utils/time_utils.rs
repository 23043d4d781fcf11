use chrono::{Datelike, NaiveDate, Weekday};

pub struct TimeUtils;

impl TimeUtils {
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Number of calendar days in `[start, end]`, or 0 if the range is inverted.
    pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
        let span = (end - start).num_days();
        if span < 0 { 0 } else { span as usize + 1 }
    }

    /// Every calendar day from `start` to `end` inclusive.
    pub fn each_day(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        start
            .iter_days()
            .take(Self::days_inclusive(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn each_day_is_inclusive() {
        let days: Vec<_> = TimeUtils::each_day(day(2024, 1, 30), day(2024, 2, 2)).collect();
        assert_eq!(
            days,
            vec![day(2024, 1, 30), day(2024, 1, 31), day(2024, 2, 1), day(2024, 2, 2)]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        assert_eq!(TimeUtils::days_inclusive(day(2024, 1, 5), day(2024, 1, 4)), 0);
        assert_eq!(TimeUtils::each_day(day(2024, 1, 5), day(2024, 1, 4)).count(), 0);
    }

    #[test]
    fn weekend_detection() {
        // 2024-01-06 is a Saturday
        assert!(TimeUtils::is_weekend(day(2024, 1, 6)));
        assert!(TimeUtils::is_weekend(day(2024, 1, 7)));
        assert!(!TimeUtils::is_weekend(day(2024, 1, 8)));
    }
}
