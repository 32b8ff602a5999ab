//! WASM bindings for block-validator.
//!
//! Exposes overlap checks, checked placement and free-slot computation to the
//! browser day view via `wasm-bindgen`. Intervals and schedules are passed as
//! JSON strings: a single `{start, end}` object for the candidate and an array
//! of such objects (or full block records) for the existing schedule.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p block-validator-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/block_validator_wasm.wasm
//! ```

use block_validator::{Interval, TimeBlock};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ConflictDto {
    index: usize,
    start: i32,
    end: i32,
    overlap_minutes: i64,
}

// ---------------------------------------------------------------------------
// JSON parsing helpers
// ---------------------------------------------------------------------------

fn parse_interval_json(json: &str) -> Result<Interval, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid interval JSON: {}", e))
}

/// Accepts both bare `{start, end}` objects and stored block records.
fn parse_schedule_json(json: &str) -> Result<Vec<Interval>, String> {
    let blocks: Vec<TimeBlock> =
        serde_json::from_str(json).map_err(|e| format!("Invalid schedule JSON: {}", e))?;
    Ok(block_validator::block::intervals_of(&blocks))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations (testable off-wasm)
// ---------------------------------------------------------------------------

fn is_overlapping_impl(candidate_json: &str, existing_json: &str) -> Result<bool, String> {
    let candidate = parse_interval_json(candidate_json)?;
    let existing = parse_schedule_json(existing_json)?;
    Ok(block_validator::is_overlapping(&candidate, &existing))
}

fn find_conflicts_impl(candidate_json: &str, existing_json: &str) -> Result<String, String> {
    let candidate = parse_interval_json(candidate_json)?;
    let existing = parse_schedule_json(existing_json)?;

    let dtos: Vec<ConflictDto> = block_validator::find_conflicts(&candidate, &existing)
        .into_iter()
        .map(|c| ConflictDto {
            index: c.index,
            start: c.existing.start,
            end: c.existing.end,
            overlap_minutes: c.overlap_minutes,
        })
        .collect();

    to_json(&dtos)
}

fn check_placement_impl(candidate_json: &str, existing_json: &str) -> Result<(), String> {
    let candidate = parse_interval_json(candidate_json)?;
    let existing = parse_schedule_json(existing_json)?;
    block_validator::check_placement(&candidate, &existing).map_err(|e| e.to_string())
}

fn find_free_slots_impl(
    existing_json: &str,
    window_start: i32,
    window_end: i32,
) -> Result<String, String> {
    let existing = parse_schedule_json(existing_json)?;
    let window = Interval::new(window_start, window_end);
    to_json(&block_validator::find_free_slots(&existing, &window))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// True if the candidate block overlaps any block in the existing schedule.
///
/// Touching blocks (one ends exactly when the other starts) do not overlap.
#[wasm_bindgen(js_name = "isOverlapping")]
pub fn is_overlapping(candidate_json: &str, existing_json: &str) -> Result<bool, JsValue> {
    is_overlapping_impl(candidate_json, existing_json).map_err(|e| JsValue::from_str(&e))
}

/// Every existing block the candidate overlaps.
///
/// Returns a JSON array of `{index, start, end, overlap_minutes}` objects in
/// schedule order.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(candidate_json: &str, existing_json: &str) -> Result<String, JsValue> {
    find_conflicts_impl(candidate_json, existing_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a drop: throws with a readable message if the candidate is empty,
/// falls outside the day, or overlaps an existing block.
#[wasm_bindgen(js_name = "checkPlacement")]
pub fn check_placement(candidate_json: &str, existing_json: &str) -> Result<(), JsValue> {
    check_placement_impl(candidate_json, existing_json).map_err(|e| JsValue::from_str(&e))
}

/// Free slots between `window_start` and `window_end` (minutes since midnight).
///
/// Returns a JSON array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findFreeSlots")]
pub fn find_free_slots(
    existing_json: &str,
    window_start: i32,
    window_end: i32,
) -> Result<String, JsValue> {
    find_free_slots_impl(existing_json, window_start, window_end)
        .map_err(|e| JsValue::from_str(&e))
}
