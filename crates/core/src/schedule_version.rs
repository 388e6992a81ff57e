//! Schedule versions: named timetable configurations for one branch.
//!
//! Create, update and duplicate all funnel through [`normalize`] so that
//! validation always sees a complete record. Updates merge the patch onto
//! the stored record first and validate the merged whole, never the sparse
//! patch on its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::EntityId;
use crate::week::{DayOfWeek, WeekScheduleType};

/// Suffix appended to the name of a duplicated version when no name is given.
pub const DUPLICATE_NAME_SUFFIX: &str = " (copy)";

/// Reusable template or date-bounded period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleType {
    Template,
    Period,
}

/// A complete, normalized schedule version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleVersion {
    pub id: EntityId,
    pub organization_id: EntityId,
    pub branch_id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub schedule_type: ScheduleType,
    pub week_schedule_type: WeekScheduleType,
    pub week_start_day: DayOfWeek,
    pub days_of_week: Vec<DayOfWeek>,
    pub lessons_per_day: i32,
    /// Present only for `Period` versions.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Input for creating a schedule version. Omitted fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewScheduleVersion {
    pub organization_id: EntityId,
    pub branch_id: EntityId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type", default)]
    pub schedule_type: Option<ScheduleType>,
    #[serde(default)]
    pub week_schedule_type: Option<WeekScheduleType>,
    #[serde(default)]
    pub week_start_day: Option<DayOfWeek>,
    pub days_of_week: Vec<DayOfWeek>,
    pub lessons_per_day: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Sparse update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ScheduleVersionPatch {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub schedule_type: Option<ScheduleType>,
    #[serde(default)]
    pub week_start_day: Option<DayOfWeek>,
    #[serde(default)]
    pub days_of_week: Option<Vec<DayOfWeek>>,
    #[serde(default)]
    pub lessons_per_day: Option<i32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Options for duplicating a version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DuplicateScheduleVersion {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Replacement period bounds; a period copy with unchanged dates
    /// overlaps its source.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Fill defaults and canonicalize a new version.
///
/// Defaults: `Template`, `OneWeek`, `Monday`. Repeated days collapse to
/// their first occurrence. Template versions drop their dates. Shape rules
/// are not checked here; see `period_validation::validate_shape`.
pub fn normalize(id: EntityId, input: NewScheduleVersion) -> ScheduleVersion {
    let schedule_type = input.schedule_type.unwrap_or(ScheduleType::Template);
    let is_period = schedule_type == ScheduleType::Period;

    ScheduleVersion {
        id,
        organization_id: input.organization_id,
        branch_id: input.branch_id,
        name: input.name,
        schedule_type,
        week_schedule_type: input
            .week_schedule_type
            .unwrap_or(WeekScheduleType::OneWeek),
        week_start_day: input.week_start_day.unwrap_or(DayOfWeek::Monday),
        days_of_week: dedup_days(&input.days_of_week),
        lessons_per_day: input.lessons_per_day,
        start_date: input.start_date.filter(|_| is_period),
        end_date: input.end_date.filter(|_| is_period),
    }
}

/// Merge `patch` onto `existing` and normalize the result.
///
/// Identity, tenant, branch and rotation length always come from the
/// stored record.
pub fn apply_patch(existing: &ScheduleVersion, patch: ScheduleVersionPatch) -> ScheduleVersion {
    let merged = NewScheduleVersion {
        organization_id: existing.organization_id,
        branch_id: existing.branch_id,
        name: patch.name.unwrap_or_else(|| existing.name.clone()),
        schedule_type: Some(patch.schedule_type.unwrap_or(existing.schedule_type)),
        week_schedule_type: Some(existing.week_schedule_type),
        week_start_day: Some(patch.week_start_day.unwrap_or(existing.week_start_day)),
        days_of_week: patch
            .days_of_week
            .unwrap_or_else(|| existing.days_of_week.clone()),
        lessons_per_day: patch.lessons_per_day.unwrap_or(existing.lessons_per_day),
        start_date: patch.start_date.or(existing.start_date),
        end_date: patch.end_date.or(existing.end_date),
    };
    normalize(existing.id, merged)
}

/// Clone `existing` under a new id.
///
/// The result still has to pass period validation before it is stored.
pub fn duplicate(
    existing: &ScheduleVersion,
    new_id: EntityId,
    options: DuplicateScheduleVersion,
) -> ScheduleVersion {
    let name = options
        .name
        .unwrap_or_else(|| format!("{}{DUPLICATE_NAME_SUFFIX}", existing.name));

    normalize(
        new_id,
        NewScheduleVersion {
            organization_id: existing.organization_id,
            branch_id: existing.branch_id,
            name,
            schedule_type: Some(existing.schedule_type),
            week_schedule_type: Some(existing.week_schedule_type),
            week_start_day: Some(existing.week_start_day),
            days_of_week: existing.days_of_week.clone(),
            lessons_per_day: existing.lessons_per_day,
            start_date: options.start_date.or(existing.start_date),
            end_date: options.end_date.or(existing.end_date),
        },
    )
}

/// Refuse to validate against versions from another organization.
pub fn ensure_tenant_scope(
    candidate: &ScheduleVersion,
    existing: &[ScheduleVersion],
) -> Result<(), CoreError> {
    match existing
        .iter()
        .find(|v| v.organization_id != candidate.organization_id)
    {
        Some(foreign) => Err(CoreError::Forbidden(format!(
            "Schedule version {} belongs to another organization",
            foreign.id
        ))),
        None => Ok(()),
    }
}

fn dedup_days(days: &[DayOfWeek]) -> Vec<DayOfWeek> {
    let mut unique = Vec::with_capacity(days.len());
    for day in days {
        if !unique.contains(day) {
            unique.push(*day);
        }
    }
    unique
}
