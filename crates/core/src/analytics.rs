//! Room utilization and teacher workload figures.
//!
//! Parity-restricted placements (`Odd` / `Even`) only happen every other
//! week, so they count as half a weekly lesson averaged over the two-week
//! rotation.

use serde::Serialize;

use crate::lesson::LessonPlacement;
use crate::types::EntityId;
use crate::week::WeekParity;

/// Default length of one lesson in academic hours.
pub const DEFAULT_HOURS_PER_LESSON: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomUtilization {
    pub room_id: EntityId,
    pub total_slots: u32,
    pub occupied_slots: f64,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherWorkload {
    pub teacher_id: EntityId,
    pub lessons_count: usize,
    pub hours_per_week: f64,
}

fn weekly_weight(parity: WeekParity) -> f64 {
    match parity {
        WeekParity::Both => 1.0,
        WeekParity::Odd | WeekParity::Even => 0.5,
    }
}

/// Share of a room's weekly slots that are booked, busiest rooms first.
pub fn room_utilization(
    lessons: &[LessonPlacement],
    room_ids: &[EntityId],
    days: u32,
    slots_per_day: u32,
) -> Vec<RoomUtilization> {
    let total_slots = days * slots_per_day;

    let mut rows: Vec<RoomUtilization> = room_ids
        .iter()
        .map(|&room_id| {
            let occupied_slots: f64 = lessons
                .iter()
                .filter(|l| l.room_id == room_id)
                .map(|l| weekly_weight(l.week_parity))
                .sum();
            let percentage = if total_slots == 0 {
                0
            } else {
                (occupied_slots / f64::from(total_slots) * 100.0).round() as u32
            };
            RoomUtilization {
                room_id,
                total_slots,
                occupied_slots,
                percentage,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.room_id.cmp(&b.room_id))
    });
    rows
}

/// Weekly teaching hours per teacher, heaviest load first.
pub fn teacher_workload(
    lessons: &[LessonPlacement],
    teacher_ids: &[EntityId],
    hours_per_lesson: f64,
) -> Vec<TeacherWorkload> {
    let mut rows: Vec<TeacherWorkload> = teacher_ids
        .iter()
        .map(|&teacher_id| {
            let own: Vec<&LessonPlacement> =
                lessons.iter().filter(|l| l.teacher_id == teacher_id).collect();
            let weekly_lessons: f64 = own.iter().map(|l| weekly_weight(l.week_parity)).sum();
            TeacherWorkload {
                teacher_id,
                lessons_count: own.len(),
                hours_per_week: weekly_lessons * hours_per_lesson,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.hours_per_week
            .total_cmp(&a.hours_per_week)
            .then_with(|| a.teacher_id.cmp(&b.teacher_id))
    });
    rows
}
