use axum::response::Html;
use std::fmt::Write;
use taco_domain::constants::{
    CC_CVV, CC_EXPIRATION, CC_NUMBER, DELIVERY_CITY, DELIVERY_NAME, DELIVERY_STATE,
    DELIVERY_STREET, DELIVERY_ZIP, DESIGN_PATH, ORDERS_PATH,
};
use taco_domain::order::{OrderDetails, TacoOrder};
use taco_domain::validation::FieldErrors;
use taco_kernel::server::html::{escape, field_errors, page};

pub(crate) fn order_page(order: &TacoOrder, details: &OrderDetails, errors: &FieldErrors) -> Html<String> {
    let tacos = order.tacos().iter().fold(String::new(), |mut out, taco| {
        let ingredients =
            taco.ingredients().iter().map(|i| i.name).collect::<Vec<_>>().join(", ");
        let _ = write!(out, "<li>{} <small>({})</small></li>", escape(taco.name()), escape(&ingredients));
        out
    });
    let tacos = if tacos.is_empty() {
        "<p>You haven't designed any tacos yet.</p>".to_owned()
    } else {
        format!("<ul>{tacos}</ul>")
    };

    let delivery = [
        ("Name", DELIVERY_NAME, &details.delivery_name),
        ("Street address", DELIVERY_STREET, &details.delivery_street),
        ("City", DELIVERY_CITY, &details.delivery_city),
        ("State", DELIVERY_STATE, &details.delivery_state),
        ("Zip code", DELIVERY_ZIP, &details.delivery_zip),
    ];
    let payment = [
        ("Credit Card #", CC_NUMBER, &details.cc_number),
        ("Expiration", CC_EXPIRATION, &details.cc_expiration),
        ("CVV", CC_CVV, &details.cc_cvv),
    ];

    let body = format!(
        r#"<h1>Order your taco creations!</h1>
<h3>Your tacos in this order:</h3>
{tacos}
<a href="{DESIGN_PATH}" id="another">Design another taco</a>
<form method="POST" action="{ORDERS_PATH}" id="orderForm">
<h3>Deliver my taco masterpieces to...</h3>
{delivery}
<h3>Here's how I'll pay...</h3>
{payment}
<input type="submit" value="Submit Order"/>
</form>"#,
        delivery = fields(&delivery, errors),
        payment = fields(&payment, errors),
    );

    page("Taco Cloud", &body)
}

fn fields(rows: &[(&str, &str, &String)], errors: &FieldErrors) -> String {
    rows.iter().fold(String::new(), |mut out, (label, name, value)| {
        let _ = write!(
            out,
            r#"<label for="{name}">{label}: </label><input type="text" id="{name}" name="{name}" value="{value}"/>{errors}<br/>"#,
            value = escape(value),
            errors = field_errors(errors, name),
        );
        out
    })
}
