//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use timetable_api::error::AppError;
use timetable_core::conflict::{ConflictKind, LessonConflict};
use timetable_core::error::CoreError;
use timetable_core::period_validation::PeriodViolation;
use uuid::Uuid;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("slot must start before it ends".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "slot must start before it ends");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 409 with CONFLICT code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("room taken".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "room taken");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Forbidden maps to 403 with FORBIDDEN code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("other organization".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "other organization");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("either week or date is required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "either week or date is required");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and hides the detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("audit task failed: worker panicked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("panicked"));
}

// ---------------------------------------------------------------------------
// Test: shape violations map to 400 with their own code and details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inverted_range_returns_400_with_details() {
    let err = AppError::Period(PeriodViolation::InvertedPeriodRange {
        start_date: date(2025, 12, 31),
        end_date: date(2025, 9, 1),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVERTED_PERIOD_RANGE");
    assert_eq!(json["details"]["kind"], "inverted_period_range");
    assert_eq!(json["details"]["start_date"], "2025-12-31");
}

#[tokio::test]
async fn missing_dates_message_names_both_fields() {
    let err = AppError::Period(PeriodViolation::MissingPeriodDates {
        missing: vec!["start_date", "end_date"],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_PERIOD_DATES");
    assert_eq!(
        json["error"],
        "A period schedule requires start_date and end_date"
    );
}

// ---------------------------------------------------------------------------
// Test: an overlapping period maps to 409 and names the other version
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overlapping_period_returns_409() {
    let other = Uuid::from_u128(7);
    let err = AppError::Period(PeriodViolation::OverlappingPeriod {
        conflicting_id: other,
        start_date: date(2025, 9, 1),
        end_date: date(2025, 12, 31),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "OVERLAPPING_PERIOD");
    assert_eq!(json["details"]["conflicting_id"], other.to_string());
}

// ---------------------------------------------------------------------------
// Test: lesson conflicts map to 409 with one detail entry per conflict
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lesson_conflicts_return_409_with_messages() {
    let conflicts = vec![
        LessonConflict {
            kind: ConflictKind::TeacherDoubleBooked,
            entity_id: Uuid::from_u128(100),
            candidate_id: Uuid::from_u128(2),
            existing_id: Uuid::from_u128(1),
        },
        LessonConflict {
            kind: ConflictKind::RoomDoubleBooked,
            entity_id: Uuid::from_u128(200),
            candidate_id: Uuid::from_u128(2),
            existing_id: Uuid::from_u128(1),
        },
    ];

    let (status, json) = error_to_response(AppError::LessonConflicts(conflicts)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "LESSON_CONFLICT");
    assert_eq!(json["error"], "Lesson collides with 2 existing booking(s)");

    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["conflict"]["kind"], "teacher_double_booked");
    assert_eq!(
        details[1]["message"],
        format!(
            "Room {} is already booked by lesson {} at this time",
            Uuid::from_u128(200),
            Uuid::from_u128(1)
        )
    );
}

// ---------------------------------------------------------------------------
// Test: domain errors convert into the matching AppError variant
// ---------------------------------------------------------------------------

#[test]
fn domain_errors_convert_via_from() {
    let err: AppError = PeriodViolation::EmptyDaysOfWeek.into();
    assert_matches!(err, AppError::Period(PeriodViolation::EmptyDaysOfWeek));

    let err: AppError = CoreError::Forbidden("other organization".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));

    let err: AppError = validator::ValidationErrors::new().into();
    assert_matches!(err, AppError::InvalidRequest(_));
}
