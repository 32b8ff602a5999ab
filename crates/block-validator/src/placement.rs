//! Checked placement of a block on the day grid.
//!
//! [`crate::overlap::is_overlapping`] answers yes/no for any input. The checks
//! here sit in front of it for callers that want malformed candidates rejected
//! with a reason instead of silently treated as non-overlapping.

use crate::error::{Result, ValidationError};
use crate::interval::Interval;
use tracing::debug;

/// Validate `candidate` and check it against `existing`.
///
/// # Errors
/// - `ValidationError::EmptyInterval` if `start >= end`.
/// - `ValidationError::OutOfDay` if `start < 0` or `end > 1440`.
/// - `ValidationError::Overlap` for the first existing interval it overlaps.
pub fn check_placement(candidate: &Interval, existing: &[Interval]) -> Result<()> {
    check(candidate, existing, None)
}

/// Same as [`check_placement`] for a block that already sits at `self_index`
/// in `existing` and is being moved or resized.
pub fn check_move(candidate: &Interval, existing: &[Interval], self_index: usize) -> Result<()> {
    check(candidate, existing, Some(self_index))
}

fn check(candidate: &Interval, existing: &[Interval], skip: Option<usize>) -> Result<()> {
    let Interval { start, end } = *candidate;

    if candidate.is_empty() {
        debug!(start, end, "rejecting empty interval");
        return Err(ValidationError::EmptyInterval { start, end });
    }
    if !candidate.is_within_day() {
        debug!(start, end, "rejecting interval outside the day");
        return Err(ValidationError::OutOfDay { start, end });
    }

    let hit = existing
        .iter()
        .enumerate()
        .find(|(i, e)| Some(*i) != skip && candidate.overlaps(e));

    match hit {
        Some((index, e)) => {
            debug!(start, end, index, "overlap detected");
            Err(ValidationError::Overlap {
                start: e.start,
                end: e.end,
                index,
            })
        }
        None => Ok(()),
    }
}
