//! Error types for checked block placement and clock parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty interval: start {start} is not before end {end}")]
    EmptyInterval { start: i32, end: i32 },

    #[error("Interval {start}..{end} falls outside the day (0..1440)")]
    OutOfDay { start: i32, end: i32 },

    /// `index` points into the `existing` slice that was checked against.
    #[error("Overlap detected with existing block {start}..{end} (index {index})")]
    Overlap { start: i32, end: i32, index: usize },

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
