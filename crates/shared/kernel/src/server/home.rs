use super::html::page;
use axum::response::Html;
use taco_domain::constants::DESIGN_PATH;

pub(super) async fn home_handler() -> Html<String> {
    page(
        "Taco Cloud",
        &format!(
            r#"<h1>Welcome to Taco Cloud</h1>
<p><a href="{DESIGN_PATH}" id="design">Design a taco</a></p>"#
        ),
    )
}
