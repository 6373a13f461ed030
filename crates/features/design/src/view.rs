use crate::binder::TacoSubmission;
use axum::response::Html;
use std::fmt::Write;
use taco_domain::catalog::Catalog;
use taco_domain::constants::{CURRENT_ORDER_PATH, DESIGN_PATH, INGREDIENTS, NAME};
use taco_domain::order::TacoOrder;
use taco_domain::validation::FieldErrors;
use taco_kernel::server::html::{escape, field_errors, page};

/// Renders the design form, re-checking `submission`'s picks and showing `errors`.
pub(crate) fn design_page(
    catalog: &Catalog,
    submission: &TacoSubmission,
    errors: &FieldErrors,
    order: &TacoOrder,
) -> Html<String> {
    let mut groups = String::new();
    for (category, bucket) in catalog.grouped() {
        let _ = write!(
            groups,
            r#"<div class="ingredient-group" id="{key}"><h3>{prompt}</h3>"#,
            key = category.as_ref(),
            prompt = category.prompt(),
        );
        for ingredient in bucket {
            let checked = if submission.is_selected(ingredient.id) { " checked" } else { "" };
            let _ = write!(
                groups,
                r#"<label><input name="{INGREDIENTS}" type="checkbox" value="{id}"{checked}/> <span>{name}</span></label>"#,
                id = ingredient.id,
                name = escape(ingredient.name),
            );
        }
        groups.push_str("</div>");
    }

    let summary = match order.len() {
        0 => String::new(),
        n => format!(
            r#"<p class="order-summary">Your order has {n} taco{s}. <a href="{CURRENT_ORDER_PATH}">Review order</a></p>"#,
            s = if n == 1 { "" } else { "s" },
        ),
    };

    let body = format!(
        r#"<h1>Design your taco!</h1>
{summary}
<form method="POST" action="{DESIGN_PATH}" id="tacoForm">
<div class="grid">{groups}</div>
{ingredient_errors}
<div>
<h3>Name your taco creation:</h3>
<input type="text" name="{NAME}" value="{name}"/>
{name_errors}
<br/>
<button>Submit Your Taco</button>
</div>
</form>"#,
        ingredient_errors = field_errors(errors, INGREDIENTS),
        name = escape(&submission.name),
        name_errors = field_errors(errors, NAME),
    );

    page("Taco Cloud", &body)
}
