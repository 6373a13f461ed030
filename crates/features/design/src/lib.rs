//! Design feature slice: the ingredient selection form and taco submission.
//!
//! `GET /design` renders the catalog grouped by category; `POST /design` binds the
//! submitted fields into a [`TacoSubmission`], resolves ingredient identifiers
//! against the catalog, validates the result and appends it to the session's order.

mod binder;
mod handlers;
mod view;

pub use crate::binder::TacoSubmission;

use axum::Router;
use axum::routing::get;
use taco_domain::constants::DESIGN_PATH;
use taco_kernel::server::ApiState;

/// Routes owned by the design slice.
pub fn router() -> Router<ApiState> {
    tracing::debug!("Design slice routes registered");
    Router::new().route(DESIGN_PATH, get(handlers::show_design_form).post(handlers::process_taco))
}
