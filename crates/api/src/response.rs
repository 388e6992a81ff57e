use serde::Serialize;

/// Success envelope: every 2xx body is `{ "data": ... }`. Handler errors and
/// body rejections from [`AppJson`](crate::extract::AppJson) use the
/// `{ "error", "code" }` shape rendered by [`AppError`](crate::error::AppError).
/// Routing failures (404, 405) carry no body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
