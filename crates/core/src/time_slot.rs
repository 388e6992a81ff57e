//! Time slots: the ordered periods of a teaching day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::EntityId;

/// A period of the day. `order` drives sorting and adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: EntityId,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub order: i32,
}

/// A slot must start strictly before it ends.
pub fn validate_time_slot(slot: &TimeSlot) -> Result<(), CoreError> {
    if slot.start_time >= slot.end_time {
        return Err(CoreError::Validation(format!(
            "Time slot {} must start before it ends ({} >= {})",
            slot.order, slot.start_time, slot.end_time
        )));
    }
    Ok(())
}

/// Sort slots by `order`, falling back to start time.
pub fn sort_by_order(slots: &mut [TimeSlot]) {
    slots.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

/// Two slots are adjacent when their orders differ by exactly one.
pub fn are_adjacent(a: &TimeSlot, b: &TimeSlot) -> bool {
    (i64::from(a.order) - i64::from(b.order)).abs() == 1
}

/// Validate a whole day's slot set.
///
/// Every slot must be well-formed, orders must be unique, and once sorted
/// by order no slot may begin before the previous one has ended.
pub fn validate_slot_set(slots: &[TimeSlot]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for slot in slots {
        validate_time_slot(slot)?;
        if !seen.insert(slot.order) {
            return Err(CoreError::Validation(format!(
                "Duplicate time slot order {}",
                slot.order
            )));
        }
    }

    let mut sorted = slots.to_vec();
    sort_by_order(&mut sorted);
    for pair in sorted.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_time < prev.end_time {
            return Err(CoreError::Validation(format!(
                "Time slot {} starts at {} before slot {} ends at {}",
                next.order, next.start_time, prev.order, prev.end_time
            )));
        }
    }

    Ok(())
}
