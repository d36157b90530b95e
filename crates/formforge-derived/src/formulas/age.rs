use chrono::{DateTime, Datelike, NaiveDate};
use formforge_core::models::FieldValues;

use super::source_text;

/// Whole years between the birth date held by `source` and `today`.
///
/// `None` when the source is empty, not a date, or in the future.
pub fn calculate(source: &str, values: &FieldValues, today: NaiveDate) -> Option<String> {
    let raw = source_text(values, source);
    if raw.is_empty() {
        return None;
    }
    let birth = parse_date(raw.trim())?;
    let years = years_between(birth, today);
    (years >= 0).then(|| years.to_string())
}

/// Accepts `YYYY-MM-DD` (date inputs) and RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Completed years, one less if this year's anniversary is still ahead.
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}
