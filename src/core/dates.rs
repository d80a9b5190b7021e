//! Calendar-date helpers shared by the ledger and its views.
//!
//! Dates carry no time component, so day differences are exact calendar-day
//! counts and never depend on the hour a reference was taken.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::errors::{LedgerError, LedgerResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    let raw = input.trim();
    if !has_date_shape(raw) {
        return Err(LedgerError::InvalidDate(format!(
            "`{}` is not in YYYY-MM-DD form",
            raw
        )));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|err| LedgerError::InvalidDate(format!("`{}`: {}", raw, err)))
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Signed whole days from `reference` to `target`: positive is future, negative overdue.
pub fn days_until(target: NaiveDate, reference: NaiveDate) -> i64 {
    target.signed_duration_since(reference).num_days()
}

/// Same as [`days_until`], ignoring the time of day carried by `reference`.
pub fn days_until_at(target: NaiveDate, reference: NaiveDateTime) -> i64 {
    days_until(target, reference.date())
}

/// Shifts `date` by `n` calendar days; `n` may be negative.
pub fn add_days(date: NaiveDate, n: i64) -> LedgerResult<NaiveDate> {
    let days = Days::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or_else(|| {
        LedgerError::InvalidDate(format!(
            "{} shifted by {} days is out of range",
            format_date(date),
            n
        ))
    })
}

/// List label: `D-3` ahead of expiry, `D-0` on the day, `D+2` when overdue.
pub fn dday_label(days_left: i64) -> String {
    if days_left >= 0 {
        format!("D-{}", days_left)
    } else {
        format!("D+{}", days_left.unsigned_abs())
    }
}

/// Carousel badge: `D-DAY` once the date is reached, otherwise `D-n`.
pub fn badge_label(days_left: i64) -> String {
    if days_left <= 0 {
        "D-DAY".to_string()
    } else {
        format!("D-{}", days_left)
    }
}
