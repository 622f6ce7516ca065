//! Integration tests for endpoints that do not touch the database

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let app = common::TestApp::new_lazy();

    let (status, response) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_check() {
    let app = common::TestApp::new_lazy();

    let (status, response) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_admin_site_configuration() {
    let app = common::TestApp::new_lazy();

    let (status, response) = app.get("/api/v1/admin").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response).unwrap();

    assert_eq!(body["site_header"], "Nutrition App Administration");
    assert_eq!(body["site_title"], "Nutrition Admin");
    assert_eq!(body["index_title"], "Welcome to Nutrition Management");

    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["model"], "food_category");
    assert_eq!(models[1]["model"], "food_item");
}

#[tokio::test]
async fn test_admin_food_bulk_actions_exposed() {
    let app = common::TestApp::new_lazy();

    let (_, response) = app.get("/api/v1/admin").await;
    let body: Value = serde_json::from_str(&response).unwrap();

    let actions: Vec<&str> = body["models"][1]["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        actions,
        vec![
            "make_active",
            "make_inactive",
            "mark_as_organic",
            "mark_as_non_organic"
        ]
    );
}

#[tokio::test]
async fn test_admin_fieldsets_grouping() {
    let app = common::TestApp::new_lazy();

    let (_, response) = app.get("/api/v1/admin").await;
    let body: Value = serde_json::from_str(&response).unwrap();

    let category_fieldsets = body["models"][0]["fieldsets"].as_array().unwrap();
    let titles: Vec<&str> = category_fieldsets
        .iter()
        .map(|f| f["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Basic Information", "Status", "Statistics", "Timestamps"]
    );

    // Statistics is a collapsed, category-only section
    assert_eq!(category_fieldsets[2]["collapsed"], true);
    let food_fieldsets = body["models"][1]["fieldsets"].as_array().unwrap();
    assert!(food_fieldsets.iter().all(|f| f["title"] != "Statistics"));
}

#[tokio::test]
async fn test_unknown_bulk_action_rejected() {
    let app = common::TestApp::new_lazy();

    // Body deserialization fails before any database access
    let body = serde_json::json!({ "action": "delete_everything", "ids": [] });
    let (status, _) = app.post("/api/v1/foods/bulk", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_order_by_rejected() {
    let app = common::TestApp::new_lazy();

    let (status, _) = app.get("/api/v1/foods?order_by=secret_column").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_id_rejected() {
    let app = common::TestApp::new_lazy();

    let (status, response) = app.get("/api/v1/categories/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
