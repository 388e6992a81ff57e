//! Route definitions for the `/schedules` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::schedules;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// POST   /validate             -> validate_create
/// POST   /validate-update      -> validate_update
/// POST   /validate-duplicate   -> validate_duplicate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(schedules::validate_create))
        .route("/validate-update", post(schedules::validate_update))
        .route("/validate-duplicate", post(schedules::validate_duplicate))
}
