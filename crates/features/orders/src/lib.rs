//! Orders feature slice: reviewing the session's order and submitting it.

mod binder;
mod handlers;
mod view;

use axum::Router;
use axum::routing::{get, post};
use taco_domain::constants::{CURRENT_ORDER_PATH, ORDERS_PATH};
use taco_kernel::server::ApiState;

/// Routes owned by the orders slice.
pub fn router() -> Router<ApiState> {
    tracing::debug!("Orders slice routes registered");
    Router::new()
        .route(CURRENT_ORDER_PATH, get(handlers::order_form))
        .route(ORDERS_PATH, post(handlers::process_order))
}
