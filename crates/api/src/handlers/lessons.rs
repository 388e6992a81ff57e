//! Handlers for the `/lessons` resource.
//!
//! The caller supplies the candidate and the placement set of one branch and
//! schedule version; nothing is persisted here.

use std::collections::BTreeSet;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use timetable_core::analytics::{self, RoomUtilization, TeacherWorkload};
use timetable_core::conflict::{self, LessonConflict};
use timetable_core::lesson::LessonPlacement;
use timetable_core::time_slot::TimeSlot;
use timetable_core::timetable_view::{self, DaySchedule, ViewFilter};
use timetable_core::types::EntityId;
use timetable_core::week::{DayOfWeek, WeekParity, WeekScheduleType};
use timetable_core::week_copy::copy_to_opposite_week;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// A conflict plus its rendered message.
#[derive(Debug, Serialize)]
pub struct ConflictReport {
    #[serde(flatten)]
    pub conflict: LessonConflict,
    pub message: String,
}

impl From<LessonConflict> for ConflictReport {
    fn from(conflict: LessonConflict) -> Self {
        let message = conflict.message();
        Self { conflict, message }
    }
}

fn reports(conflicts: Vec<LessonConflict>) -> Vec<ConflictReport> {
    conflicts.into_iter().map(ConflictReport::from).collect()
}

// ── Conflict checks ──────────────────────────────────────────────────

/// Request body for a single-candidate check.
#[derive(Debug, Deserialize, Validate)]
pub struct PlacementRequest {
    pub candidate: LessonPlacement,
    #[validate(length(max = 10000))]
    pub existing: Vec<LessonPlacement>,
    /// Rotation of the schedule version the lesson belongs to. When given,
    /// one-week schedules only accept `both` parity.
    #[serde(default)]
    pub week_schedule_type: Option<WeekScheduleType>,
}

#[derive(Debug, Serialize)]
pub struct ConflictsResponse {
    pub conflicts: Vec<ConflictReport>,
}

/// POST /api/v1/lessons/conflicts
///
/// Report every conflict of the candidate. Always 200; an empty list means
/// the placement is free.
pub async fn find_conflicts(
    AppJson(body): AppJson<PlacementRequest>,
) -> AppResult<Json<DataResponse<ConflictsResponse>>> {
    body.validate()?;

    let conflicts = conflict::find_conflicts(&body.candidate, &body.existing);
    tracing::debug!(
        candidate_id = %body.candidate.id,
        existing = body.existing.len(),
        conflicts = conflicts.len(),
        "Checked lesson placement"
    );

    Ok(Json(DataResponse {
        data: ConflictsResponse {
            conflicts: reports(conflicts),
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct AcceptedPlacement {
    pub accepted: bool,
    pub lesson: LessonPlacement,
}

/// POST /api/v1/lessons/check
///
/// Write gate for the editor: 409 with the conflict list if the candidate
/// collides with anything, 400 if its parity breaks a one-week rotation,
/// otherwise 200 echoing the accepted lesson.
pub async fn check_placement(
    AppJson(body): AppJson<PlacementRequest>,
) -> AppResult<Json<DataResponse<AcceptedPlacement>>> {
    body.validate()?;

    if let Some(week_type) = body.week_schedule_type {
        body.candidate.validate_parity_for_week_type(week_type)?;
    }

    let conflicts = conflict::find_conflicts(&body.candidate, &body.existing);
    if !conflicts.is_empty() {
        tracing::info!(
            candidate_id = %body.candidate.id,
            conflicts = conflicts.len(),
            "Lesson placement rejected"
        );
        return Err(AppError::LessonConflicts(conflicts));
    }

    Ok(Json(DataResponse {
        data: AcceptedPlacement {
            accepted: true,
            lesson: body.candidate,
        },
    }))
}

// ── Audit ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct AuditRequest {
    #[validate(length(max = 10000))]
    pub lessons: Vec<LessonPlacement>,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub conflicts: Vec<ConflictReport>,
    pub conflicting_ids: BTreeSet<EntityId>,
}

/// POST /api/v1/lessons/audit
///
/// Every conflict inside a placement set, each colliding pair once.
///
/// The pairwise scan is quadratic in the set size, so it runs on the
/// blocking pool rather than an async worker.
pub async fn audit(
    AppJson(body): AppJson<AuditRequest>,
) -> AppResult<Json<DataResponse<AuditResponse>>> {
    body.validate()?;

    let lesson_count = body.lessons.len();
    let conflicts =
        tokio::task::spawn_blocking(move || conflict::find_all_conflicts(&body.lessons))
            .await
            .map_err(|e| AppError::InternalError(format!("audit task failed: {e}")))?;
    let conflicting_ids = conflict::involved_ids(&conflicts);
    tracing::debug!(
        lessons = lesson_count,
        conflicts = conflicts.len(),
        "Audited placement set"
    );

    Ok(Json(DataResponse {
        data: AuditResponse {
            conflicts: reports(conflicts),
            conflicting_ids,
        },
    }))
}

// ── Copy to the other week ───────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CopyWeekRequest {
    #[validate(length(max = 10000))]
    pub lessons: Vec<LessonPlacement>,
    pub group_id: EntityId,
    pub source_week: WeekParity,
}

#[derive(Debug, Serialize)]
pub struct CopyWeekResponse {
    pub copies: Vec<LessonPlacement>,
    pub conflicts: Vec<ConflictReport>,
}

/// POST /api/v1/lessons/copy-week
///
/// Clone a group's odd- or even-week lessons into the opposite week. The
/// copies are checked against the supplied set and against each other; the
/// caller decides whether to persist them.
pub async fn copy_week(
    AppJson(body): AppJson<CopyWeekRequest>,
) -> AppResult<Json<DataResponse<CopyWeekResponse>>> {
    body.validate()?;

    if body.source_week == WeekParity::Both {
        return Err(AppError::BadRequest(
            "source_week must be 'odd' or 'even'".to_string(),
        ));
    }

    let copies = copy_to_opposite_week(
        &body.lessons,
        body.group_id,
        body.source_week,
        Uuid::new_v4,
    );

    let mut placed = body.lessons.clone();
    let mut conflicts = Vec::new();
    for copy in &copies {
        conflicts.extend(conflict::find_conflicts(copy, &placed));
        placed.push(copy.clone());
    }
    tracing::info!(
        group_id = %body.group_id,
        copies = copies.len(),
        conflicts = conflicts.len(),
        "Copied lessons to opposite week"
    );

    Ok(Json(DataResponse {
        data: CopyWeekResponse {
            copies,
            conflicts: reports(conflicts),
        },
    }))
}

// ── Read-only week view ──────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct WeekViewRequest {
    #[validate(length(max = 10000))]
    pub lessons: Vec<LessonPlacement>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    pub filter: ViewFilter,
    /// Explicit week parity. Takes precedence over `date`.
    #[serde(default)]
    pub week: Option<WeekParity>,
    /// Any date inside the week to show.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct WeekViewResponse {
    pub week: WeekParity,
    /// Teaching day `date` falls on, if a date was given and it is not a Sunday.
    pub today: Option<DayOfWeek>,
    pub days: Vec<DaySchedule>,
}

/// POST /api/v1/lessons/view
pub async fn week_view(
    AppJson(body): AppJson<WeekViewRequest>,
) -> AppResult<Json<DataResponse<WeekViewResponse>>> {
    body.validate()?;

    let week = match (body.week, body.date) {
        (Some(week), _) => week,
        (None, Some(date)) => WeekParity::for_date(date),
        (None, None) => {
            return Err(AppError::BadRequest(
                "either week or date is required".to_string(),
            ))
        }
    };
    let today = body
        .date
        .and_then(|d| DayOfWeek::from_weekday(chrono::Datelike::weekday(&d)));

    let days =
        timetable_view::lessons_for_week(&body.lessons, body.filter, week, &body.time_slots);

    Ok(Json(DataResponse {
        data: WeekViewResponse { week, today, days },
    }))
}

// ── Analytics ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyticsRequest {
    #[validate(length(max = 10000))]
    pub lessons: Vec<LessonPlacement>,
    #[serde(default)]
    pub room_ids: Vec<EntityId>,
    #[serde(default)]
    pub teacher_ids: Vec<EntityId>,
    #[validate(range(min = 1, max = 6))]
    pub days: u32,
    #[validate(range(min = 1, max = 18))]
    pub slots_per_day: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub rooms: Vec<RoomUtilization>,
    pub teachers: Vec<TeacherWorkload>,
}

/// POST /api/v1/lessons/analytics
pub async fn analytics(
    State(state): State<AppState>,
    AppJson(body): AppJson<AnalyticsRequest>,
) -> AppResult<Json<DataResponse<AnalyticsResponse>>> {
    body.validate()?;

    let rooms = analytics::room_utilization(
        &body.lessons,
        &body.room_ids,
        body.days,
        body.slots_per_day,
    );
    let teachers = analytics::teacher_workload(
        &body.lessons,
        &body.teacher_ids,
        state.config.hours_per_lesson,
    );

    Ok(Json(DataResponse {
        data: AnalyticsResponse { rooms, teachers },
    }))
}
