//! Lesson placements: the unit the conflict checker reasons about.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;
use crate::week::{DayOfWeek, WeekParity, WeekScheduleType};

/// An assignment of a teacher, room and group to one day / time slot /
/// week parity within a single schedule version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlacement {
    pub id: EntityId,
    pub day_of_week: DayOfWeek,
    pub time_slot_id: EntityId,
    pub week_parity: WeekParity,
    pub teacher_id: EntityId,
    pub room_id: EntityId,
    pub group_id: EntityId,
}

impl LessonPlacement {
    /// Same day, same slot and compatible parity. The precondition for any
    /// conflict.
    pub fn is_slot_coincident(&self, other: &LessonPlacement) -> bool {
        self.day_of_week == other.day_of_week
            && self.time_slot_id == other.time_slot_id
            && self.week_parity.is_compatible_with(other.week_parity)
    }

    /// Whether this placement takes place in a week of the given parity.
    pub fn occurs_in_week(&self, week: WeekParity) -> bool {
        self.week_parity.includes(week)
    }

    /// A one-week schedule has no rotation, so its placements must recur
    /// every week.
    pub fn validate_parity_for_week_type(
        &self,
        week_type: WeekScheduleType,
    ) -> Result<(), CoreError> {
        if week_type == WeekScheduleType::OneWeek && self.week_parity != WeekParity::Both {
            return Err(CoreError::Validation(format!(
                "Lesson {} is scheduled for {} weeks only, but the schedule uses a one-week rotation",
                self.id, self.week_parity
            )));
        }
        Ok(())
    }
}
