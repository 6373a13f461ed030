use crate::binder::bind_details;
use crate::view;
use axum::Form;
use axum::response::{IntoResponse, Response};
use taco_domain::constants::{DESIGN_PATH, HOME_PATH};
use taco_domain::order::OrderDetails;
use taco_kernel::prelude::*;
use tracing::{debug, info, warn};

pub(crate) async fn order_form(session: Session) -> impl IntoResponse {
    let html = view::order_page(&session.order(), &OrderDetails::default(), &FieldErrors::new());
    (session.cookie(), html)
}

pub(crate) async fn process_order(
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let details = bind_details(fields);

    match session.complete_order(details.clone()) {
        Some(Ok(completed)) => {
            info!(
                session = %session.id(),
                tacos = completed.tacos.len(),
                placed_at = %completed.placed_at,
                order = ?completed,
                "Order submitted"
            );
            found(HOME_PATH)
        },
        Some(Err(errors)) => {
            debug!(session = %session.id(), %errors, "Order rejected");
            view::order_page(&session.order(), &details, &errors).into_response()
        },
        None => {
            warn!(session = %session.id(), "Order submitted without an order in progress");
            (session.cookie(), found(DESIGN_PATH)).into_response()
        },
    }
}
