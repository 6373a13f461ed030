use super::{ApiState, health, home};
use axum::Router;
use axum::routing::get;
use taco_domain::constants::{HEALTH_PATH, HOME_PATH};

/// Routes that are not owned by a feature slice: the home page and the health check.
pub fn system_router() -> Router<ApiState> {
    Router::new()
        .route(HOME_PATH, get(home::home_handler))
        .route(HEALTH_PATH, get(health::health_handler))
}
