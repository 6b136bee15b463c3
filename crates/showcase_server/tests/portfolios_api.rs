mod common;

use axum::http::StatusCode;
use common::{get, post_json, seeded_app};
use serde_json::json;

#[tokio::test]
async fn list_returns_seeded_portfolios() {
    let app = seeded_app();

    let (status, body) = get(&app, "/api/portfolios").await;
    assert_eq!(status, StatusCode::OK);

    let portfolios = body["portfolios"].as_array().unwrap();
    assert_eq!(portfolios.len(), 2);
    assert_eq!(portfolios[0]["templateId"], "template-1");
    assert_eq!(portfolios[1]["name"], "Kevin Brown");
    assert!(portfolios[1].get("blog").is_none());
}

#[tokio::test]
async fn create_with_empty_sections_returns_201_and_empty_skills() {
    let app = seeded_app();

    let (status, body) = post_json(
        &app,
        "/api/portfolios",
        &json!({
            "name": "Jane",
            "title": "Engineer",
            "email": "jane@x.com",
            "skills": [],
            "services": [],
            "portfolio": [],
            "testimonials": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Portfolio created successfully");
    assert_eq!(body["portfolio"]["skills"], json!([]));
    assert_eq!(body["portfolio"]["portfolio"], json!([]));

    let id = body["portfolio"]["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/portfolios/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body["portfolio"]);
}

#[tokio::test]
async fn missing_title_returns_400() {
    let app = seeded_app();

    let (status, body) = post_json(
        &app,
        "/api/portfolios",
        &json!({ "name": "Jane", "email": "jane@x.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: name, title, and email are required"
    );

    let (_, list) = get(&app, "/api/portfolios").await;
    assert_eq!(list["portfolios"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_id_returns_404() {
    let app = seeded_app();

    let (status, body) = get(&app, "/api/portfolios/never-issued").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Portfolio not found");
}

#[tokio::test]
async fn list_supports_skill_filter() {
    let app = seeded_app();

    let (_, body) = get(&app, "/api/portfolios?skill=pilot").await;
    let names: Vec<_> = body["portfolios"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Emma Foster"]);
}

#[tokio::test]
async fn socials_outside_the_common_platforms_survive_create() {
    let app = seeded_app();

    let (status, body) = post_json(
        &app,
        "/api/portfolios",
        &json!({
            "name": "Jane",
            "title": "Engineer",
            "email": "jane@x.com",
            "socials": {
                "instagram": "https://ig/j",
                "github": "https://gh/j"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["portfolio"]["id"].as_str().unwrap();
    let (_, fetched) = get(&app, &format!("/api/portfolios/{id}")).await;
    assert_eq!(
        fetched["socials"],
        json!({ "instagram": "https://ig/j", "github": "https://gh/j" })
    );
}
