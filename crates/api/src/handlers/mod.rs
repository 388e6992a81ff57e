//! Request handlers.
//!
//! Every handler is a thin adapter: it validates the request body, runs the
//! pure checks from `timetable_core` on the data the caller supplied, and
//! maps verdicts onto [`AppError`](crate::error::AppError).

pub mod lessons;
pub mod schedules;
pub mod time_slots;
