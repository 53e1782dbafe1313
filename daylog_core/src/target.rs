//! Target-file naming rules.
//!
//! Pure date-to-filename mapping; no collaborator access happens here so
//! every rule is unit-testable with plain `NaiveDate` values.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Shared log file for Saturday and Sunday messages.
pub const WEEKEND_FILE: &str = "weekend.txt";

/// True for Saturday and Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Filename a message dated `date` is appended to.
///
/// Weekdays get a zero-padded date stamp, weekends share [`WEEKEND_FILE`]:
/// - 2020-02-13 (Thursday) -> `log20200213.txt`
/// - 2020-02-08 (Saturday) -> `weekend.txt`
pub fn target_for(date: NaiveDate) -> String {
    if is_weekend(date) {
        WEEKEND_FILE.to_string()
    } else {
        format!("log{}.txt", date.format("%Y%m%d"))
    }
}

/// Most recent Saturday on or before `date`.
///
/// Two dates belong to the same weekend exactly when their weekend starts
/// coincide; the archive check compares these anchors.
pub fn weekend_start(date: NaiveDate) -> NaiveDate {
    let days_since_saturday = u64::from((date.weekday().num_days_from_monday() + 2) % 7);
    date - Days::new(days_since_saturday)
}

/// Archive name for a weekend file last written on `date`.
pub fn archive_name(date: NaiveDate) -> String {
    format!("weekend-{}.txt", date.format("%Y%m%d"))
}
