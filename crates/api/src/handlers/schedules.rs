//! Handlers for schedule-version validation.
//!
//! Each handler builds the complete record that would be stored, checks it
//! against the caller-supplied versions of the same branch, and echoes it
//! back on success.

use axum::Json;
use serde::Deserialize;
use timetable_core::period_validation::validate_schedule_version;
use timetable_core::schedule_version::{
    self, DuplicateScheduleVersion, NewScheduleVersion, ScheduleVersion, ScheduleVersionPatch,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(nested)]
    pub version: NewScheduleVersion,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub existing: Vec<ScheduleVersion>,
}

/// POST /api/v1/schedules/validate
pub async fn validate_create(
    AppJson(body): AppJson<CreateRequest>,
) -> AppResult<Json<DataResponse<ScheduleVersion>>> {
    body.validate()?;

    let candidate = schedule_version::normalize(Uuid::new_v4(), body.version);
    schedule_version::ensure_tenant_scope(&candidate, &body.existing)?;
    validate_schedule_version(&candidate, &body.existing, None)?;

    tracing::debug!(
        branch_id = %candidate.branch_id,
        schedule_type = ?candidate.schedule_type,
        "Schedule version accepted"
    );
    Ok(Json(DataResponse { data: candidate }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequest {
    pub current: ScheduleVersion,
    #[serde(default)]
    #[validate(nested)]
    pub patch: ScheduleVersionPatch,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub existing: Vec<ScheduleVersion>,
}

/// POST /api/v1/schedules/validate-update
///
/// The patch is merged onto `current` and the merged record is validated;
/// the stored state of `current` never counts as an overlap.
pub async fn validate_update(
    AppJson(body): AppJson<UpdateRequest>,
) -> AppResult<Json<DataResponse<ScheduleVersion>>> {
    body.validate()?;

    let candidate = schedule_version::apply_patch(&body.current, body.patch);
    schedule_version::ensure_tenant_scope(&candidate, &body.existing)?;
    validate_schedule_version(&candidate, &body.existing, Some(body.current.id))?;

    tracing::debug!(version_id = %candidate.id, "Schedule version update accepted");
    Ok(Json(DataResponse { data: candidate }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct DuplicateRequest {
    pub source: ScheduleVersion,
    #[serde(default)]
    #[validate(nested)]
    pub options: DuplicateScheduleVersion,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub existing: Vec<ScheduleVersion>,
}

/// POST /api/v1/schedules/validate-duplicate
///
/// The copy is validated like a new version. The source always takes part in
/// the overlap check, so a period copy needs new dates.
pub async fn validate_duplicate(
    AppJson(body): AppJson<DuplicateRequest>,
) -> AppResult<Json<DataResponse<ScheduleVersion>>> {
    body.validate()?;

    let DuplicateRequest {
        source,
        options,
        mut existing,
    } = body;

    let candidate = schedule_version::duplicate(&source, Uuid::new_v4(), options);
    if !existing.iter().any(|v| v.id == source.id) {
        existing.push(source.clone());
    }
    schedule_version::ensure_tenant_scope(&candidate, &existing)?;
    validate_schedule_version(&candidate, &existing, None)?;

    tracing::debug!(
        source_id = %source.id,
        version_id = %candidate.id,
        "Schedule version duplicate accepted"
    );
    Ok(Json(DataResponse { data: candidate }))
}
