use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use taco::kernel::server::SessionId;
use taco_server::Server;
use tower::ServiceExt;

const VALID_ORDER: &str = "deliveryName=Jane+Doe&deliveryStreet=1+Main+St&deliveryCity=Springfield\
&deliveryState=IL&deliveryZip=62701&ccNumber=4111111111111111&ccExpiration=10%2F29&ccCVV=123";

fn app() -> (Server, Router) {
    let server = Server::builder().build().expect("server");
    let router = server.router();
    (server, router)
}

fn session_cookie(response: &Response) -> String {
    let raw = response.headers()[header::SET_COOKIE].to_str().expect("ascii cookie");
    raw.split(';').next().expect("cookie pair").to_owned()
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut request = Request::get(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    request.body(Body::empty()).unwrap()
}

fn post(path: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn home_and_health_are_served() {
    let (_server, router) = app();

    let home = router.clone().oneshot(get("/", None)).await.unwrap();
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_string(home).await.contains(r#"href="/design""#));

    let health = router.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn design_then_order_round_trip() {
    let (server, router) = app();

    let first = router.clone().oneshot(get("/design", None)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let cookie = session_cookie(&first);
    assert!(cookie.starts_with("TACO_SESSION="));
    assert!(body_string(first).await.contains("Designate your wrap:"));

    let taco = router
        .clone()
        .oneshot(post("/design", &cookie, "name=Veggie+Taco&ingredients=FLTO&ingredients=LETC"))
        .await
        .unwrap();
    assert_eq!(taco.status(), StatusCode::FOUND);
    assert_eq!(taco.headers()[header::LOCATION], "/orders/current");
    assert!(taco.headers().get(header::SET_COOKIE).is_none());
    let id = SessionId::from(cookie.trim_start_matches("TACO_SESSION="));
    assert_eq!(server.state().sessions.peek(&id).map(|order| order.len()), Some(1));

    let short = router
        .clone()
        .oneshot(post("/design", &cookie, "name=Tc&ingredients=FLTO"))
        .await
        .unwrap();
    assert_eq!(short.status(), StatusCode::OK);
    assert!(body_string(short).await.contains("Name must be at least five characters long"));

    let form = router.clone().oneshot(get("/orders/current", Some(&cookie))).await.unwrap();
    assert_eq!(form.status(), StatusCode::OK);
    let html = body_string(form).await;
    assert!(html.contains("Veggie Taco"));
    assert!(!html.contains(">Tc<"));

    let placed = router.clone().oneshot(post("/orders", &cookie, VALID_ORDER)).await.unwrap();
    assert_eq!(placed.status(), StatusCode::FOUND);
    assert_eq!(placed.headers()[header::LOCATION], "/");

    let again = router.oneshot(get("/design", Some(&cookie))).await.unwrap();
    assert_eq!(again.status(), StatusCode::OK);
    assert!(!body_string(again).await.contains("order-summary"));
}

#[tokio::test]
async fn sessions_do_not_share_orders() {
    let (_server, router) = app();

    let alice = session_cookie(&router.clone().oneshot(get("/design", None)).await.unwrap());
    let bob = session_cookie(&router.clone().oneshot(get("/design", None)).await.unwrap());
    assert_ne!(alice, bob);

    let added = router
        .clone()
        .oneshot(post("/design", &alice, "name=Carnivore&ingredients=COTO&ingredients=GRBF"))
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::FOUND);

    let bob_view = router.oneshot(get("/orders/current", Some(&bob))).await.unwrap();
    assert!(!body_string(bob_view).await.contains("Carnivore"));
}
