//! Decide whether a candidate block conflicts with an existing day schedule.
//!
//! Every function here is a linear scan over a borrowed snapshot. Input order
//! never changes the yes/no answer; it only determines which conflict is
//! reported first. Adjacent blocks (one ends exactly when another starts) are
//! NOT conflicts, and empty intervals (`start >= end`) never conflict.

use crate::interval::Interval;
use tracing::trace;

/// An existing interval that the candidate collides with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// Position of the colliding interval in the `existing` input.
    pub index: usize,
    pub existing: Interval,
    pub overlap_minutes: i64,
}

/// True if `candidate` overlaps at least one interval in `existing`.
///
/// Two intervals overlap when `a.start < b.end && a.end > b.start`. Returns
/// `false` for an empty `existing`, and for an empty `candidate`.
/// Stops at the first conflict found.
pub fn is_overlapping(candidate: &Interval, existing: &[Interval]) -> bool {
    is_overlapping_iter(candidate, existing)
}

/// [`is_overlapping`] over any borrowed collection of intervals.
pub fn is_overlapping_iter<'a, I>(candidate: &Interval, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Interval>,
{
    existing.into_iter().any(|e| candidate.overlaps(e))
}

/// Like [`is_overlapping`], but ignores the element at `skip_index`.
///
/// Used when an existing block is moved or resized: the snapshot still holds
/// its old position, which must not count as a conflict with itself.
pub fn is_overlapping_except(
    candidate: &Interval,
    existing: &[Interval],
    skip_index: usize,
) -> bool {
    existing
        .iter()
        .enumerate()
        .any(|(i, e)| i != skip_index && candidate.overlaps(e))
}

/// Index of the first interval in `existing` that `candidate` overlaps.
pub fn first_conflict(candidate: &Interval, existing: &[Interval]) -> Option<usize> {
    let index = existing.iter().position(|e| candidate.overlaps(e))?;
    trace!(
        start = candidate.start,
        end = candidate.end,
        index,
        "candidate conflicts with existing interval"
    );
    Some(index)
}

/// Every interval in `existing` that `candidate` overlaps, in input order.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(candidate: &Interval, existing: &[Interval]) -> Vec<Conflict> {
    existing
        .iter()
        .enumerate()
        .filter(|(_, e)| candidate.overlaps(e))
        .map(|(index, e)| Conflict {
            index,
            existing: *e,
            overlap_minutes: candidate.overlap_minutes(e),
        })
        .collect()
}
