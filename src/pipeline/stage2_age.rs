use chrono::{DateTime, Datelike, NaiveDate};

use crate::model::raw::RawValue;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Accepts ISO dates (with or without a time part), RFC 3339 timestamps,
/// `YYYY/MM/DD` and the `DD/MM/YYYY` form the student service renders.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // "YYYY-MM-DD hh:mm:ss" and friends: the calendar date is the prefix.
    if let Some(prefix) = s.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(d);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Text dates as above; numbers are Unix timestamps in milliseconds.
pub fn birth_date_from_raw(raw: &RawValue) -> Option<NaiveDate> {
    match raw {
        RawValue::Text(s) => parse_birth_date(s),
        RawValue::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Whole years between `dob` and `today`, one less while this year's
/// birthday is still ahead.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

pub fn compute_age_from_dob(dob: Option<&RawValue>, today: NaiveDate) -> Option<i32> {
    let date = birth_date_from_raw(dob?)?;
    Some(age_on(date, today))
}

/// Explicit age, then date of birth, then the fallback.
pub fn resolve_age(
    explicit: Option<f64>,
    dob: Option<&RawValue>,
    today: NaiveDate,
    fallback: f64,
) -> f64 {
    explicit
        .or_else(|| compute_age_from_dob(dob, today).map(f64::from))
        .unwrap_or(fallback)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_age.rs"]
mod tests;
