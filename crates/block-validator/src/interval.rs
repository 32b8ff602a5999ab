//! The `Interval` value type: a half-open range of minutes since local midnight.
//!
//! Overlap uses the strict test `a.start < b.end && a.end > b.start`, so blocks
//! that merely touch (one ends exactly when the other starts) do NOT overlap.
//! An interval whose `start` is not before its `end` covers no instant at all
//! and overlaps nothing.

use serde::{Deserialize, Serialize};

/// Number of minutes in a calendar day. Also the exclusive upper bound of `end`.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A half-open time range `[start, end)` in minutes since local midnight.
///
/// Construction never validates: values outside `0..=1440` or with
/// `start >= end` are representable so that callers can hand over whatever the
/// UI produced and decide for themselves how strict to be
/// (see [`crate::placement`] for the checked path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The whole day, `[00:00, 24:00)`.
    pub const fn whole_day() -> Self {
        Self::new(0, MINUTES_PER_DAY)
    }

    /// True when the interval covers no instant (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when both bounds sit inside a single day (`0 <= start`, `end <= 1440`).
    pub fn is_within_day(&self) -> bool {
        self.start >= 0 && self.end <= MINUTES_PER_DAY
    }

    /// Length in minutes; zero for empty intervals.
    pub fn duration_minutes(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.end) - i64::from(self.start)
        }
    }

    /// True when `self` and `other` share at least one minute.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.end && self.end > other.start
    }

    /// Minutes shared by both intervals: `min(ends) - max(starts)`, or zero.
    pub fn overlap_minutes(&self, other: &Interval) -> i64 {
        if !self.overlaps(other) {
            return 0;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        i64::from(end) - i64::from(start)
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        !other.is_empty() && self.start <= other.start && other.end <= self.end
    }

    /// Clip to `window`, returning `None` if nothing of `self` remains inside it.
    pub fn clamp_to(&self, window: &Interval) -> Option<Interval> {
        if !self.overlaps(window) {
            return None;
        }
        Some(Interval::new(
            self.start.max(window.start),
            self.end.min(window.end),
        ))
    }
}

impl From<(i32, i32)> for Interval {
    fn from((start, end): (i32, i32)) -> Self {
        Self::new(start, end)
    }
}
