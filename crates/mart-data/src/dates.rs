//! Date dimension generation.
//!
//! One row per calendar day over a fixed range wide enough to cover every
//! order in the source data, keyed sequentially in date order.

use chrono::{Datelike, NaiveDate};
use mart_core::calendar;
use mart_core::schema::DimDate;
use tracing::info;

/// First day covered by the date dimension.
pub fn range_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 1).expect("static date")
}

/// Last day covered by the date dimension (inclusive).
pub fn range_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 12, 31).expect("static date")
}

/// Generate the date dimension for the fixed range, keys starting at 1.
pub fn build_dim_date() -> Vec<DimDate> {
    let end = range_end();
    let rows: Vec<DimDate> = range_start()
        .iter_days()
        .take_while(|date| *date <= end)
        .enumerate()
        .map(|(idx, date)| DimDate {
            date_key: idx as i64 + 1,
            full_date: date,
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
            quarter: calendar::quarter(date),
            day_of_week: calendar::day_of_week(date),
            day_name: calendar::day_name(date),
            month_name: calendar::month_name(date),
            is_weekend: calendar::is_weekend(date),
        })
        .collect();

    info!(
        "dim_date: {} rows ({} to {})",
        rows.len(),
        range_start(),
        end
    );
    rows
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_covers_full_range_once() {
        let rows = build_dim_date();

        // 2016 is a leap year: 366 + 365 + 365 + 365.
        assert_eq!(rows.len(), 1461);

        let distinct: HashSet<NaiveDate> = rows.iter().map(|r| r.full_date).collect();
        assert_eq!(distinct.len(), rows.len());

        assert_eq!(rows.first().unwrap().full_date, range_start());
        assert_eq!(rows.last().unwrap().full_date, range_end());
    }

    #[test]
    fn test_keys_are_dense_and_date_ordered() {
        let rows = build_dim_date();

        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row.date_key, idx as i64 + 1);
        }
        assert!(rows.windows(2).all(|w| w[0].full_date < w[1].full_date));
    }

    #[test]
    fn test_leap_day_present() {
        let rows = build_dim_date();
        let leap = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
        let row = rows.iter().find(|r| r.full_date == leap).unwrap();

        assert_eq!(row.day, 29);
        assert_eq!(row.month, 2);
        assert_eq!(row.year, 2016);
        assert_eq!(row.month_name, "February");
    }

    #[test]
    fn test_weekend_flags() {
        let rows = build_dim_date();

        // 2016-01-01 was a Friday; 2016-01-02 a Saturday.
        assert!(!rows[0].is_weekend);
        assert_eq!(rows[0].day_name, "Friday");
        assert!(rows[1].is_weekend);
        assert_eq!(rows[1].day_name, "Saturday");

        for row in &rows {
            assert_eq!(row.is_weekend, row.day_of_week >= 5);
        }
    }

    #[test]
    fn test_derived_calendar_fields() {
        let rows = build_dim_date();
        let date = NaiveDate::from_ymd_opt(2017, 10, 2).unwrap();
        let row = rows.iter().find(|r| r.full_date == date).unwrap();

        assert_eq!(row.quarter, 4);
        assert_eq!(row.day_of_week, 0);
        assert_eq!(row.day_name, "Monday");
        assert_eq!(row.month_name, "October");
    }
}
