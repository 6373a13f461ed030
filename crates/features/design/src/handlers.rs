use crate::binder::TacoSubmission;
use crate::view;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use taco_domain::constants::CURRENT_ORDER_PATH;
use taco_kernel::prelude::*;
use tracing::{debug, info};

pub(crate) async fn show_design_form(
    State(catalog): State<Catalog>,
    session: Session,
) -> impl IntoResponse {
    let order = session.order();
    let html = view::design_page(&catalog, &TacoSubmission::default(), &FieldErrors::new(), &order);
    (session.cookie(), html)
}

pub(crate) async fn process_taco(
    State(catalog): State<Catalog>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let submission = TacoSubmission::from_pairs(fields);

    match submission.bind(&catalog) {
        Ok(taco) => {
            info!(
                session = %session.id(),
                taco = taco.name(),
                ingredients = ?taco.ingredient_ids().collect::<Vec<_>>(),
                "Processing taco"
            );
            let count = session.add_taco(taco);
            debug!(session = %session.id(), tacos = count, "Taco added to order");
            (session.cookie(), found(CURRENT_ORDER_PATH)).into_response()
        },
        Err(errors) => {
            debug!(session = %session.id(), %errors, "Taco design rejected");
            let html = view::design_page(&catalog, &submission, &errors, &session.order());
            (session.cookie(), html).into_response()
        },
    }
}
