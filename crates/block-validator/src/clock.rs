//! Minute-of-day ↔ wall-clock conversion.
//!
//! The validator works in minutes since local midnight. The calendar layer
//! stores absolute timestamps, and people type `HH:MM`. These helpers translate
//! between the three. Everything is naive local time; there is no timezone
//! handling here.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Result, ValidationError};
use crate::interval::{Interval, MINUTES_PER_DAY};

/// Midnight of `date` plus `minutes`.
///
/// Values of 1440 and above roll over into following days, negative values
/// into preceding ones. Returns `None` only if the result leaves chrono's
/// representable range.
pub fn minutes_to_datetime(minutes: i32, date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
}

/// Minutes since midnight of a wall-clock time. Seconds are truncated.
pub fn datetime_to_minutes<T: Timelike>(time: &T) -> i32 {
    // hour <= 23 and minute <= 59, so this always fits.
    (time.hour() * 60 + time.minute()) as i32
}

/// Parse `HH:MM` into minutes since midnight.
///
/// Accepts `00:00` through `23:59`, plus `24:00` as the exclusive end of day.
///
/// # Errors
/// Returns `ValidationError::InvalidClock` for anything else.
pub fn parse_clock(s: &str) -> Result<i32> {
    let invalid = || ValidationError::InvalidClock(s.to_string());

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !digits(hours)
        || !digits(minutes)
    {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;

    match (hours, minutes) {
        (24, 0) => Ok(MINUTES_PER_DAY),
        (0..=23, 0..=59) => Ok(hours * 60 + minutes),
        _ => Err(invalid()),
    }
}

/// Format minutes since midnight as `HH:MM`.
///
/// Values outside a single day are wrapped onto the 24-hour clock, except that
/// exactly 1440 renders as `24:00` so interval ends read naturally.
pub fn format_clock(minutes: i32) -> String {
    if minutes == MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parse `HH:MM-HH:MM` into an [`Interval`].
///
/// The range is not checked for `start < end`; that is the job of
/// [`crate::placement::check_placement`].
pub fn parse_range(s: &str) -> Result<Interval> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| ValidationError::InvalidClock(s.to_string()))?;
    Ok(Interval::new(parse_clock(start)?, parse_clock(end)?))
}

/// Format an interval as `HH:MM-HH:MM`.
pub fn format_range(interval: &Interval) -> String {
    format!(
        "{}-{}",
        format_clock(interval.start),
        format_clock(interval.end)
    )
}
