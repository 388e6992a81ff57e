use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use timetable_core::conflict::LessonConflict;
use timetable_core::error::CoreError;
use timetable_core::period_validation::PeriodViolation;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`PeriodViolation`] for domain verdicts and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `timetable_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A schedule version failed period validation.
    #[error(transparent)]
    Period(#[from] PeriodViolation),

    /// A lesson placement collides with existing placements.
    #[error("Lesson collides with {} existing booking(s)", .0.len())]
    LessonConflicts(Vec<LessonConflict>),

    /// The request body is not JSON or does not match the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// The request body failed schema validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A server-side failure. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Period validation ---
            AppError::Period(violation) => {
                let status = match violation {
                    PeriodViolation::OverlappingPeriod { .. } => StatusCode::CONFLICT,
                    _ => StatusCode::BAD_REQUEST,
                };
                details = serde_json::to_value(violation).ok();
                (status, violation.code(), violation.to_string())
            }

            // --- Placement conflicts ---
            AppError::LessonConflicts(conflicts) => {
                details = Some(json!(conflicts
                    .iter()
                    .map(|c| json!({ "conflict": c, "message": c.message() }))
                    .collect::<Vec<_>>()));
                (StatusCode::CONFLICT, "LESSON_CONFLICT", self.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::MalformedBody(rejection) => {
                let status = rejection.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "MALFORMED_BODY"
                };
                (status, code, rejection.body_text())
            }
            AppError::InvalidRequest(errors) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", errors.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
