use chrono::{Datelike, NaiveDate, Weekday};

// ── Calendar derivations ──────────────────────────────────────────────────────

/// Quarter (1-4) of the given date.
pub fn quarter(date: NaiveDate) -> i32 {
    ((date.month() as i32 - 1) / 3) + 1
}

/// Day-of-week number with Monday = 0 .. Sunday = 6.
pub fn day_of_week(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_monday() as i32
}

/// `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Full English weekday name, e.g. `"Monday"`.
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Full English month name, e.g. `"January"`.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
