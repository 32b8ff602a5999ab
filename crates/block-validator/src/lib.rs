//! # block-validator
//!
//! Overlap validation for time blocks on a single-day calendar grid.
//!
//! Blocks are half-open `[start, end)` ranges of minutes since local midnight.
//! The core question, "can this block be placed without colliding with the
//! ones already on the day?", is answered by [`is_overlapping`], a pure
//! linear scan with no state and no error channel.
//!
//! ```rust
//! use block_validator::{is_overlapping, Interval};
//!
//! let existing = [Interval::new(600, 660)]; // 10:00-11:00
//!
//! assert!(is_overlapping(&Interval::new(570, 630), &existing)); // 09:30-10:30
//! assert!(!is_overlapping(&Interval::new(660, 720), &existing)); // back-to-back
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` value type and the overlap predicate
//! - [`overlap`] — Decide whether a candidate conflicts with a schedule
//! - [`placement`] — Checked placement that rejects malformed candidates
//! - [`freebusy`] — Compute free gaps in a day window
//! - [`block`] — Category-tagged time-block records
//! - [`clock`] — Minute-of-day ↔ wall-clock conversion
//! - [`error`] — Error types

pub mod block;
pub mod clock;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod overlap;
pub mod placement;

pub use block::{Category, TimeBlock};
pub use error::ValidationError;
pub use freebusy::{find_free_slots, FreeSlot};
pub use interval::{Interval, MINUTES_PER_DAY};
pub use overlap::{find_conflicts, first_conflict, is_overlapping, Conflict};
pub use placement::{check_move, check_placement};
