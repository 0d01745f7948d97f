//! Browser clock helpers.
//!
//! `js_sys::Date` is the only time source available in the browser; these
//! helpers convert it into the `chrono` types the analytics queries use.

use chrono::{DateTime, NaiveDate};
use thrive_shared::DateRange;

/// Today's date according to the browser clock (UTC).
pub fn today() -> NaiveDate {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// The inclusive window ending today and reaching `days` back, the default
/// range for every trend widget.
pub fn last_days(days: i64) -> DateRange {
    let end = today();
    let start = end - chrono::Duration::days(days);
    DateRange::new(start, end)
}
