mod common;

use axum::http::StatusCode;
use common::{get, seeded_app};

#[tokio::test]
async fn ping_returns_pong() {
    let app = seeded_app();

    let (status, body) = get(&app, "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn templates_lists_catalog() {
    let app = seeded_app();

    let (status, body) = get(&app, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body["templates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["template-1", "template-2"]);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = seeded_app();

    let (status, _) = get(&app, "/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
