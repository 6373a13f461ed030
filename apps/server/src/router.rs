use axum::Router;
use taco::kernel::server::ApiState;
use tower_http::trace::TraceLayer;

pub(crate) fn init(state: ApiState) -> Router {
    taco::routes().layer(TraceLayer::new_for_http()).with_state(state)
}
