//! Business-day calendar generation.
//!
//! Business day = Monday through Friday. Holidays are not excluded; the
//! upstream series simply have no observation on them and forward-filling
//! covers the gap.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Every weekday in `[start, end]`, ascending, no duplicates.
///
/// Returns an empty Vec when `start > end`.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day += Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn skips_weekends() {
        // 2020-01-01 is a Wednesday; 2020-01-04/05 are Sat/Sun.
        let days = business_days(date("2020-01-01"), date("2020-01-07"));
        let expected: Vec<NaiveDate> = ["2020-01-01", "2020-01-02", "2020-01-03", "2020-01-06", "2020-01-07"]
            .iter()
            .map(|s| date(s))
            .collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn strictly_increasing_weekdays_only() {
        let days = business_days(date("2020-01-01"), date("2020-03-31"));
        for window in days.windows(2) {
            assert!(window[0] < window[1]);
        }
        for day in &days {
            assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn single_weekend_day_is_empty() {
        let days = business_days(date("2020-01-04"), date("2020-01-05"));
        assert!(days.is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let days = business_days(date("2020-02-01"), date("2020-01-01"));
        assert!(days.is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let days = business_days(date("2020-01-02"), date("2020-01-02"));
        assert_eq!(days, vec![date("2020-01-02")]);
    }
}
