//! Timetable domain core.
//!
//! Pure-logic building blocks for the timetable editor: placement conflict
//! checking, schedule-version period validation, and the read-side helpers
//! (week views, analytics) built on the same data model. No I/O, no
//! internal dependencies.

pub mod analytics;
pub mod conflict;
pub mod error;
pub mod lesson;
pub mod period_validation;
pub mod schedule_version;
pub mod time_slot;
pub mod timetable_view;
pub mod types;
pub mod week;
pub mod week_copy;
