use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use plmserver::Server;
use tower::ServiceExt;

async fn get_status(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_add_route_serves_json() {
    let mut server = Server::new("Test", "localhost", 0);
    server
        .add_route("/info", || async { serde_json::json!({"version": "1.0.0"}) })
        .await;

    let (status, body) = get_status(server.router().await, "/info").await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["version"], "1.0.0");
}

#[tokio::test]
async fn test_add_router_nests_under_path() {
    let mut server = Server::new("Test", "localhost", 0);
    let sub = Router::new().route("/ping", get(|| async { "pong" }));
    server.add_router("/api", sub).await;

    let (status, body) = get_status(server.router().await, "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"pong");

    let (status, _) = get_status(server.router().await, "/ping").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_info() {
    let server = Server::new("Test", "localhost", 5123);
    let info = server.info();
    assert_eq!(info.name, "Test");
    assert_eq!(info.http_port, 5123);
}
