use super::ApiState;
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;

/// Liveness snapshot served on `/health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    /// Seconds since the application state was built.
    pub uptime: u64,
    /// Sessions currently held in memory.
    pub sessions: u64,
}

impl Health {
    #[must_use]
    pub fn of(state: &ApiState) -> Self {
        Self {
            status: "up",
            version: env!("CARGO_PKG_VERSION"),
            uptime: state.started_at.elapsed().as_secs(),
            sessions: state.sessions.len(),
        }
    }
}

pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], Json(Health::of(&state)))
}
