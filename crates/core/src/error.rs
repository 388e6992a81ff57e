//! Errors raised by the pure checks in this crate.
//!
//! Schedule-version rejections have their own type,
//! [`PeriodViolation`](crate::period_validation::PeriodViolation), because
//! callers branch on the individual rule that failed.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed input, such as a time slot that ends before it starts or a
    /// parity the schedule's rotation cannot express.
    #[error("Invalid timetable data: {0}")]
    Validation(String),

    /// A lesson placement double-books a teacher, room or group.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The supplied data reaches outside the caller's organization.
    #[error("Outside tenant scope: {0}")]
    Forbidden(String),
}
