//! Facade crate for Taco Cloud features and shared modules.
//! Re-exports domain/kernel primitives and composes the feature slices into one router.
//! Keep this crate thin: it should compose other crates, not implement business logic.

use axum::Router;
pub use taco_design as design;
pub use taco_domain as domain;
pub use taco_kernel as kernel;
pub use taco_orders as orders;
use taco_kernel::server::ApiState;

/// Every route of the application: system pages plus all feature slices.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(kernel::server::router::system_router())
        .merge(design::router())
        .merge(orders::router())
}
