//! Compute free gaps on the day grid.
//!
//! Clips existing blocks to the window, sorts them by start, merges
//! overlapping or adjacent busy periods, then walks the gaps between them.

use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// A free gap in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: i32,
    pub end: i32,
    pub duration_minutes: i64,
}

impl FreeSlot {
    fn new(start: i32, end: i32) -> Self {
        Self {
            start,
            end,
            duration_minutes: i64::from(end) - i64::from(start),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// Merge overlapping or adjacent busy periods, clipped to `window`.
///
/// Returns a sorted, non-overlapping, non-touching list of intervals.
pub fn merge_busy_periods(existing: &[Interval], window: &Interval) -> Vec<Interval> {
    // Empty intervals and intervals entirely outside the window fall away here.
    let mut intervals: Vec<Interval> = existing
        .iter()
        .filter_map(|e| e.clamp_to(window))
        .collect();

    intervals.sort_by_key(|i| (i.start, i.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// Free slots within `window`, sorted by start.
///
/// `existing` may contain overlapping blocks; they are merged first. An empty
/// window has no free slots.
pub fn find_free_slots(existing: &[Interval], window: &Interval) -> Vec<FreeSlot> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut free_slots = Vec::new();
    let mut cursor = window.start;

    for busy in merge_busy_periods(existing, window) {
        if cursor < busy.start {
            free_slots.push(FreeSlot::new(cursor, busy.start));
        }
        cursor = cursor.max(busy.end);
    }

    if cursor < window.end {
        free_slots.push(FreeSlot::new(cursor, window.end));
    }

    free_slots
}

/// First free slot of at least `min_duration_minutes` inside `window`.
pub fn find_first_free_slot(
    existing: &[Interval],
    window: &Interval,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(existing, window)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
