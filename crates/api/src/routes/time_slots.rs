use axum::routing::post;
use axum::Router;

use crate::handlers::time_slots;
use crate::state::AppState;

/// Routes mounted at `/time-slots`.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(time_slots::validate))
}
