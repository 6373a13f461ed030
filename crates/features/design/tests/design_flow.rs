use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use taco_domain::config::ApiConfig;
use taco_kernel::server::{ApiState, SessionId};
use tower::ServiceExt;

fn state() -> ApiState {
    ApiState::builder().config(ApiConfig::default()).build().expect("state")
}

fn app(state: &ApiState) -> Router {
    taco_design::router().with_state(state.clone())
}

fn submit(session: &SessionId, body: &str) -> Request<Body> {
    Request::post("/design")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, format!("TACO_SESSION={session}"))
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn show_form_lists_catalog_by_category() {
    let state = state();
    let response =
        app(&state).oneshot(Request::get("/design").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());

    let html = body_string(response).await;
    for key in ["wrap", "protein", "veggies", "cheese", "sauce"] {
        assert!(html.contains(&format!(r#"id="{key}""#)), "missing group {key}");
    }
    assert!(html.contains(r#"value="FLTO""#));
    assert!(html.contains("Monterrey Jack"));
    assert!(html.find("Designate your wrap:") < html.find("Select your sauce:"));
}

#[tokio::test]
async fn valid_taco_is_added_and_redirects() {
    let state = state();
    let session = state.sessions.create();

    let response = app(&state)
        .oneshot(submit(
            &session,
            "name=Veggie+Taco&ingredients=FLTO&ingredients=LETC&ingredients=CHED",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/orders/current");

    let order = state.sessions.peek(&session).expect("order started");
    assert_eq!(order.len(), 1);
    assert_eq!(order.tacos()[0].name(), "Veggie Taco");
    assert_eq!(order.tacos()[0].ingredient_ids().collect::<Vec<_>>(), ["FLTO", "LETC", "CHED"]);
}

#[tokio::test]
async fn second_taco_grows_order_by_one() {
    let state = state();
    let session = state.sessions.create();

    for body in ["name=First+Taco&ingredients=COTO", "name=Second+Taco&ingredients=CARN"] {
        let response = app(&state).oneshot(submit(&session, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    assert_eq!(state.sessions.peek(&session).map(|o| o.len()), Some(2));
}

#[tokio::test]
async fn short_name_redisplays_form_without_mutating_order() {
    let state = state();
    let session = state.sessions.create();

    let response = app(&state).oneshot(submit(&session, "name=Tc&ingredients=FLTO")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Name must be at least five characters long"));
    assert!(html.contains(r#"value="FLTO" checked"#), "previous selection is kept");
    assert!(html.contains(r#"value="Tc""#));
    assert!(state.sessions.peek(&session).is_none());
}

#[tokio::test]
async fn missing_ingredients_are_rejected() {
    let state = state();
    let session = state.sessions.create();

    let response = app(&state).oneshot(submit(&session, "name=Empty+Taco")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("You must choose at least one ingredient"));
    assert!(state.sessions.peek(&session).is_none());
}

#[tokio::test]
async fn unknown_ingredient_fails_the_request() {
    let state = state();
    let session = state.sessions.create();

    let response = app(&state)
        .oneshot(submit(&session, "name=Mystery+Taco&ingredients=FLTO&ingredients=XXXX"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Unknown ingredient &#39;XXXX&#39;"));
    assert!(state.sessions.peek(&session).is_none());
}

#[tokio::test]
async fn submitted_name_is_escaped_on_redisplay() {
    let state = state();
    let session = state.sessions.create();

    let response =
        app(&state).oneshot(submit(&session, "name=%3Cb%3E&ingredients=FLTO")).await.unwrap();

    let html = body_string(response).await;
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("<b>"));
}
