//! Route definitions for the `/lessons` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// POST   /conflicts   -> find_conflicts
/// POST   /check       -> check_placement
/// POST   /audit       -> audit
/// POST   /copy-week   -> copy_week
/// POST   /view        -> week_view
/// POST   /analytics   -> analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/conflicts", post(lessons::find_conflicts))
        .route("/check", post(lessons::check_placement))
        .route("/audit", post(lessons::audit))
        .route("/copy-week", post(lessons::copy_week))
        .route("/view", post(lessons::week_view))
        .route("/analytics", post(lessons::analytics))
}
