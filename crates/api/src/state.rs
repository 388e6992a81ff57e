use std::sync::Arc;

use crate::config::ServerConfig;

/// Handler state. Timetable data arrives with each request, so only the
/// configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
