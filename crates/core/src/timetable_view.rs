//! Read-only week view of a timetable, as shown to students.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::lesson::LessonPlacement;
use crate::time_slot::TimeSlot;
use crate::types::EntityId;
use crate::week::{DayOfWeek, WeekParity};

/// Whose timetable to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ViewFilter {
    Group(EntityId),
    Teacher(EntityId),
    Room(EntityId),
}

impl ViewFilter {
    fn matches(&self, lesson: &LessonPlacement) -> bool {
        match *self {
            ViewFilter::Group(id) => lesson.group_id == id,
            ViewFilter::Teacher(id) => lesson.teacher_id == id,
            ViewFilter::Room(id) => lesson.room_id == id,
        }
    }
}

/// The lessons of one day, sorted by time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day_of_week: DayOfWeek,
    pub lessons: Vec<LessonPlacement>,
}

/// Build the week view for `filter` in a week of parity `week`.
///
/// Every teaching day is present in calendar order, possibly empty. Lessons
/// within a day are ordered by their slot's `order`; lessons referencing an
/// unknown slot go last. Ties break on lesson id.
pub fn lessons_for_week(
    lessons: &[LessonPlacement],
    filter: ViewFilter,
    week: WeekParity,
    slots: &[TimeSlot],
) -> Vec<DaySchedule> {
    let slot_order: HashMap<EntityId, i32> = slots.iter().map(|s| (s.id, s.order)).collect();

    DayOfWeek::ALL
        .iter()
        .map(|&day| {
            let mut day_lessons: Vec<LessonPlacement> = lessons
                .iter()
                .filter(|l| l.day_of_week == day && filter.matches(l) && l.occurs_in_week(week))
                .cloned()
                .collect();
            day_lessons.sort_by_key(|l| {
                (
                    slot_order.get(&l.time_slot_id).copied().unwrap_or(i32::MAX),
                    l.id,
                )
            });
            DaySchedule {
                day_of_week: day,
                lessons: day_lessons,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn slot(id: u128, order: i32) -> TimeSlot {
        TimeSlot {
            id: Uuid::from_u128(id),
            start_time: NaiveTime::from_hms_opt(8 + order as u32, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(8 + order as u32, 45, 0).unwrap(),
            order,
        }
    }

    fn lesson(id: u128, day: DayOfWeek, slot: u128, parity: WeekParity, group: u128) -> LessonPlacement {
        LessonPlacement {
            id: Uuid::from_u128(id),
            day_of_week: day,
            time_slot_id: Uuid::from_u128(slot),
            week_parity: parity,
            teacher_id: Uuid::from_u128(100),
            room_id: Uuid::from_u128(200),
            group_id: Uuid::from_u128(group),
        }
    }

    #[test]
    fn returns_all_six_days() {
        let view = lessons_for_week(&[], ViewFilter::Group(Uuid::from_u128(1)), WeekParity::Odd, &[]);
        assert_eq!(view.len(), 6);
        assert_eq!(view[0].day_of_week, DayOfWeek::Monday);
        assert_eq!(view[5].day_of_week, DayOfWeek::Saturday);
        assert!(view.iter().all(|d| d.lessons.is_empty()));
    }

    #[test]
    fn filters_by_group_and_week() {
        let lessons = vec![
            lesson(1, DayOfWeek::Monday, 10, WeekParity::Both, 7),
            lesson(2, DayOfWeek::Monday, 11, WeekParity::Even, 7),
            lesson(3, DayOfWeek::Monday, 12, WeekParity::Odd, 7),
            lesson(4, DayOfWeek::Monday, 13, WeekParity::Odd, 8),
        ];

        let view = lessons_for_week(&lessons, ViewFilter::Group(Uuid::from_u128(7)), WeekParity::Odd, &[]);

        let ids: Vec<_> = view[0].lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(3)]);
    }

    #[test]
    fn sorts_by_slot_order_with_unknown_slots_last() {
        let slots = vec![slot(10, 3), slot(11, 1), slot(12, 2)];
        let lessons = vec![
            lesson(1, DayOfWeek::Friday, 10, WeekParity::Both, 7),
            lesson(2, DayOfWeek::Friday, 99, WeekParity::Both, 7),
            lesson(3, DayOfWeek::Friday, 11, WeekParity::Both, 7),
            lesson(4, DayOfWeek::Friday, 12, WeekParity::Both, 7),
        ];

        let view = lessons_for_week(&lessons, ViewFilter::Teacher(Uuid::from_u128(100)), WeekParity::Even, &slots);

        let friday = &view[4];
        assert_eq!(friday.day_of_week, DayOfWeek::Friday);
        let ids: Vec<_> = friday.lessons.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_u128(3),
                Uuid::from_u128(4),
                Uuid::from_u128(1),
                Uuid::from_u128(2)
            ]
        );
    }

    #[test]
    fn room_filter_deserializes_from_tagged_json() {
        let filter: ViewFilter = serde_json::from_value(serde_json::json!({
            "type": "room",
            "id": "00000000-0000-0000-0000-0000000000c8"
        }))
        .unwrap();
        assert_eq!(filter, ViewFilter::Room(Uuid::from_u128(200)));
    }
}
