//! Placement conflict detection.
//!
//! A candidate placement collides with an existing one when the two are
//! slot-coincident (same day, same time slot, compatible week parity) and
//! share a teacher, a room or a group. Each shared resource is a distinct
//! conflict, so one colliding placement can produce up to three.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::lesson::LessonPlacement;
use crate::types::EntityId;

/// Which resource is double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    TeacherDoubleBooked,
    RoomDoubleBooked,
    GroupDoubleBooked,
}

impl ConflictKind {
    fn resource_label(self) -> &'static str {
        match self {
            ConflictKind::TeacherDoubleBooked => "Teacher",
            ConflictKind::RoomDoubleBooked => "Room",
            ConflictKind::GroupDoubleBooked => "Group",
        }
    }
}

/// One double-booking between the candidate and an existing placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonConflict {
    pub kind: ConflictKind,
    /// The teacher, room or group id that is booked twice.
    pub entity_id: EntityId,
    pub candidate_id: EntityId,
    pub existing_id: EntityId,
}

impl LessonConflict {
    /// Human-readable description suitable for an editor warning.
    pub fn message(&self) -> String {
        format!(
            "{} {} is already booked by lesson {} at this time",
            self.kind.resource_label(),
            self.entity_id,
            self.existing_id
        )
    }
}

/// Find every conflict between `candidate` and `existing`.
///
/// The candidate is skipped by id if it appears in `existing`. Conflicts are
/// reported in the order `existing` is iterated and, per colliding
/// placement, in teacher / room / group order. The caller is responsible for
/// scoping `existing` to one branch and schedule version.
pub fn find_conflicts(
    candidate: &LessonPlacement,
    existing: &[LessonPlacement],
) -> Vec<LessonConflict> {
    let mut conflicts = Vec::new();

    for other in existing {
        if other.id == candidate.id || !candidate.is_slot_coincident(other) {
            continue;
        }

        let shared = [
            (
                ConflictKind::TeacherDoubleBooked,
                candidate.teacher_id,
                other.teacher_id,
            ),
            (
                ConflictKind::RoomDoubleBooked,
                candidate.room_id,
                other.room_id,
            ),
            (
                ConflictKind::GroupDoubleBooked,
                candidate.group_id,
                other.group_id,
            ),
        ];

        for (kind, mine, theirs) in shared {
            if mine == theirs {
                conflicts.push(LessonConflict {
                    kind,
                    entity_id: mine,
                    candidate_id: candidate.id,
                    existing_id: other.id,
                });
            }
        }
    }

    conflicts
}

/// Audit a whole placement set.
///
/// Each colliding pair is reported once, with the later placement as the
/// candidate and the earlier one as `existing_id`.
pub fn find_all_conflicts(lessons: &[LessonPlacement]) -> Vec<LessonConflict> {
    lessons
        .iter()
        .enumerate()
        .flat_map(|(index, lesson)| find_conflicts(lesson, &lessons[..index]))
        .collect()
}

/// Ids of every placement involved in at least one conflict.
pub fn conflicting_ids(lessons: &[LessonPlacement]) -> BTreeSet<EntityId> {
    involved_ids(&find_all_conflicts(lessons))
}

/// Both sides of every conflict in an already computed list.
pub fn involved_ids(conflicts: &[LessonConflict]) -> BTreeSet<EntityId> {
    conflicts
        .iter()
        .flat_map(|c| [c.candidate_id, c.existing_id])
        .collect()
}

/// Reject the candidate if it collides with anything in `existing`.
///
/// This is the editor's write policy: any conflict blocks the save.
pub fn ensure_no_conflicts(
    candidate: &LessonPlacement,
    existing: &[LessonPlacement],
) -> Result<(), CoreError> {
    let conflicts = find_conflicts(candidate, existing);
    if conflicts.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = conflicts.iter().map(LessonConflict::message).collect();
    Err(CoreError::Conflict(messages.join("; ")))
}
