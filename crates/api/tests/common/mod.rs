#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use timetable_api::config::ServerConfig;
use timetable_api::router::build_app_router;
use timetable_api::state::AppState;

/// Defaults with a loopback listener. CORS allows the dev frontend origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A lesson placement as the API receives it. Ids are small integers
/// rendered as UUIDs so assertions stay readable.
pub fn lesson(
    id: u128,
    day: &str,
    slot: u128,
    parity: &str,
    teacher: u128,
    room: u128,
    group: u128,
) -> serde_json::Value {
    serde_json::json!({
        "id": uuid(id),
        "day_of_week": day,
        "time_slot_id": uuid(slot),
        "week_parity": parity,
        "teacher_id": uuid(teacher),
        "room_id": uuid(room),
        "group_id": uuid(group),
    })
}

pub fn uuid(n: u128) -> String {
    uuid::Uuid::from_u128(n).to_string()
}
