use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use taco_domain::config::{ApiConfig, SslConfig};
use taco_kernel::server::{ApiState, Session};
use tower::ServiceExt;

async fn whoami(session: Session) -> impl IntoResponse {
    let body = format!("{}:{}", session.id(), session.is_new());
    (session.cookie(), body)
}

fn app(state: ApiState) -> Router {
    Router::new().route("/whoami", get(whoami)).with_state(state)
}

fn state() -> ApiState {
    ApiState::builder().config(ApiConfig::default()).build().expect("state")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn first_request_receives_cookie() {
    let response = app(state())
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_owned();
    assert!(cookie.starts_with("TACO_SESSION="));
    assert!(cookie.contains("HttpOnly"));

    let body = body_string(response).await;
    assert!(body.ends_with(":true"));
}

#[tokio::test]
async fn known_cookie_resumes_session_without_new_cookie() {
    let state = state();
    let id = state.sessions.create();

    let response = app(state)
        .oneshot(
            Request::get("/whoami")
                .header(header::COOKIE, format!("TACO_SESSION={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_string(response).await, format!("{id}:false"));
}

#[tokio::test]
async fn unknown_cookie_is_replaced() {
    let response = app(state())
        .oneshot(
            Request::get("/whoami")
                .header(header::COOKIE, "TACO_SESSION=forged")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get(header::SET_COOKIE).is_some());
    let body = body_string(response).await;
    assert!(!body.starts_with("forged"));
}

#[tokio::test]
async fn tls_config_marks_cookie_secure() {
    let mut config = ApiConfig::default();
    config.server.ssl = Some(SslConfig::default());
    let state = ApiState::builder().config(config).build().expect("state");

    let response =
        app(state).oneshot(Request::get("/whoami").body(Body::empty()).unwrap()).await.unwrap();

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.ends_with("; Secure"));
}

#[tokio::test]
async fn plain_http_cookie_is_not_secure() {
    let response =
        app(state()).oneshot(Request::get("/whoami").body(Body::empty()).unwrap()).await.unwrap();

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(!cookie.contains("Secure"));
}
