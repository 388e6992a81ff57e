//! Schedule-version validity checks.
//!
//! Two steps run in order:
//!
//! 1. Shape: a `Period` needs both dates with `start <= end`, at least one
//!    teaching day, and `lessons_per_day` within bounds.
//! 2. Overlap: a `Period` must not intersect another `Period` of the same
//!    branch. Both ranges are closed, so a shared boundary day overlaps.
//!    Templates are never overlap-checked.
//!
//! Every failure is a definitional verdict on caller-supplied data. The
//! caller fixes the candidate and validates again.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule_version::{ScheduleType, ScheduleVersion};
use crate::types::EntityId;

pub const LESSONS_PER_DAY_MIN: i32 = 1;
pub const LESSONS_PER_DAY_MAX: i32 = 18;

/// Why a schedule version was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodViolation {
    #[error("A period schedule requires {}", .missing.join(" and "))]
    MissingPeriodDates { missing: Vec<&'static str> },

    #[error("Start date {start_date} is after end date {end_date}")]
    InvertedPeriodRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("At least one day of the week is required")]
    EmptyDaysOfWeek,

    #[error("Lessons per day must be between {min} and {max}, got {value}")]
    LessonsPerDayOutOfRange { value: i32, min: i32, max: i32 },

    #[error(
        "Period overlaps schedule version {conflicting_id} ({start_date} to {end_date})"
    )]
    OverlappingPeriod {
        conflicting_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

impl PeriodViolation {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            PeriodViolation::MissingPeriodDates { .. } => "MISSING_PERIOD_DATES",
            PeriodViolation::InvertedPeriodRange { .. } => "INVERTED_PERIOD_RANGE",
            PeriodViolation::EmptyDaysOfWeek => "EMPTY_DAYS_OF_WEEK",
            PeriodViolation::LessonsPerDayOutOfRange { .. } => "LESSONS_PER_DAY_OUT_OF_RANGE",
            PeriodViolation::OverlappingPeriod { .. } => "OVERLAPPING_PERIOD",
        }
    }
}

/// `Ok(())` means the candidate is valid.
pub type PeriodValidation = Result<(), PeriodViolation>;

/// Step 1: the candidate's own shape.
///
/// Repeated days are tolerated; they do not count as distinct days but do
/// make the list non-empty.
pub fn validate_shape(candidate: &ScheduleVersion) -> PeriodValidation {
    if candidate.schedule_type == ScheduleType::Period {
        let (start_date, end_date) = period_bounds(candidate)?;
        if start_date > end_date {
            return Err(PeriodViolation::InvertedPeriodRange {
                start_date,
                end_date,
            });
        }
    }

    if candidate.days_of_week.is_empty() {
        return Err(PeriodViolation::EmptyDaysOfWeek);
    }

    if !(LESSONS_PER_DAY_MIN..=LESSONS_PER_DAY_MAX).contains(&candidate.lessons_per_day) {
        return Err(PeriodViolation::LessonsPerDayOutOfRange {
            value: candidate.lessons_per_day,
            min: LESSONS_PER_DAY_MIN,
            max: LESSONS_PER_DAY_MAX,
        });
    }

    Ok(())
}

/// Run both validation steps.
///
/// `exclude_id` names the version being updated so its stored state never
/// collides with the candidate. The candidate's own id is always excluded.
/// The first overlapping version in iteration order is reported.
pub fn validate_schedule_version(
    candidate: &ScheduleVersion,
    existing_for_branch: &[ScheduleVersion],
    exclude_id: Option<EntityId>,
) -> PeriodValidation {
    validate_shape(candidate)?;

    if candidate.schedule_type != ScheduleType::Period {
        return Ok(());
    }
    let (start_date, end_date) = period_bounds(candidate)?;

    for other in existing_for_branch {
        if other.branch_id != candidate.branch_id
            || other.schedule_type != ScheduleType::Period
            || Some(other.id) == exclude_id
            || other.id == candidate.id
        {
            continue;
        }
        let (Some(other_start), Some(other_end)) = (other.start_date, other.end_date) else {
            continue;
        };
        if start_date <= other_end && other_start <= end_date {
            return Err(PeriodViolation::OverlappingPeriod {
                conflicting_id: other.id,
                start_date: other_start,
                end_date: other_end,
            });
        }
    }

    Ok(())
}

fn period_bounds(version: &ScheduleVersion) -> Result<(NaiveDate, NaiveDate), PeriodViolation> {
    match (version.start_date, version.end_date) {
        (Some(start), Some(end)) => Ok((start, end)),
        (start, end) => {
            let mut missing = Vec::new();
            if start.is_none() {
                missing.push("start_date");
            }
            if end.is_none() {
                missing.push("end_date");
            }
            Err(PeriodViolation::MissingPeriodDates { missing })
        }
    }
}
