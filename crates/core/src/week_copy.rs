//! Copying a group's lessons from one half of the rotation to the other.

use crate::lesson::LessonPlacement;
use crate::types::EntityId;
use crate::week::WeekParity;

/// Clone the group's `source`-week placements into the opposite week.
///
/// Only placements whose parity is exactly `source` are copied: `Both`
/// placements already occur in the target week. Passing `Both` as the
/// source copies nothing. The copies get fresh ids from `next_id` and are
/// returned as candidates; nothing here checks them for conflicts.
pub fn copy_to_opposite_week(
    lessons: &[LessonPlacement],
    group_id: EntityId,
    source: WeekParity,
    mut next_id: impl FnMut() -> EntityId,
) -> Vec<LessonPlacement> {
    if source == WeekParity::Both {
        return Vec::new();
    }

    let target = source.opposite();
    lessons
        .iter()
        .filter(|l| l.group_id == group_id && l.week_parity == source)
        .map(|l| LessonPlacement {
            id: next_id(),
            week_parity: target,
            ..l.clone()
        })
        .collect()
}
