pub mod health;
pub mod lessons;
pub mod schedules;
pub mod time_slots;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /lessons/conflicts                    conflicts of one candidate (POST)
/// /lessons/check                        write gate for one candidate (POST)
/// /lessons/audit                        conflicts across a placement set (POST)
/// /lessons/copy-week                    copy a group's week to the other parity (POST)
/// /lessons/view                         read-only week view (POST)
/// /lessons/analytics                    room utilization + teacher workload (POST)
///
/// /schedules/validate                   validate a new schedule version (POST)
/// /schedules/validate-update            merge a patch and validate (POST)
/// /schedules/validate-duplicate         duplicate and validate (POST)
///
/// /time-slots/validate                  validate and sort a day's slots (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lessons", lessons::router())
        .nest("/schedules", schedules::router())
        .nest("/time-slots", time_slots::router())
}
