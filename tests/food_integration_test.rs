//! Integration tests for food item endpoints, including bulk actions

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_food_defaults() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let category = app.create_category("Fruits").await;
    let category_id = category["id"].as_str().unwrap();

    let body = json!({ "name": "Apple", "category_id": category_id });
    let (status, response) = app.post("/api/v1/foods", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let food: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(food["name"], "Apple");
    assert_eq!(food["category_name"], "Fruits");
    assert_eq!(food["is_active"], true);
    assert_eq!(food["is_organic"], false);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_name_in_same_category_rejected() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let category = app.create_category("Fruits").await;
    let category_id = category["id"].as_str().unwrap().to_string();
    app.create_food("Apple", &category_id).await;

    let body = json!({ "name": "Apple", "category_id": category_id });
    let (status, response) = app.post("/api/v1/foods", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_same_name_in_different_categories_allowed() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let snacks = app.create_category("Snacks").await;

    app.create_food("Apple", fruits["id"].as_str().unwrap()).await;
    // Same name, different category
    app.create_food("Apple", snacks["id"].as_str().unwrap()).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_food_with_nonexistent_category_rejected() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    app.create_category("Vegetables").await;

    let body = json!({
        "name": "Carrot",
        "category_id": "00000000-0000-0000-0000-000000000000"
    });
    let (status, response) = app.post("/api/v1/foods", &body.to_string()).await;

    // A bad reference is correctable input: validation, not not-found
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_reassign_food_to_other_category() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let veg = app.create_category("Vegetables").await;
    let food = app.create_food("Tomato", fruits["id"].as_str().unwrap()).await;
    let food_id = food["id"].as_str().unwrap();

    let body = json!({ "category_id": veg["id"].as_str().unwrap() });
    let (status, response) = app.put(&format!("/api/v1/foods/{}", food_id), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["category_name"], "Vegetables");

    // Reassignment to a nonexistent category is rejected
    let body = json!({ "category_id": "00000000-0000-0000-0000-000000000000" });
    let (status, _) = app.put(&format!("/api/v1/foods/{}", food_id), &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_missing_food_not_found() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Ghost" });
    let (status, _) = app
        .put(
            "/api/v1/foods/00000000-0000-0000-0000-000000000000",
            &body.to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bulk_action_empty_id_set_is_noop() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let body = json!({ "action": "make_active", "ids": [] });
    let (status, response) = app.post("/api/v1/foods/bulk", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let result: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(result["updated"], 0);
    assert_eq!(
        result["message"],
        "0 food items were successfully marked as active."
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bulk_mark_as_organic() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let category_id = fruits["id"].as_str().unwrap().to_string();
    let apple = app.create_food("Apple", &category_id).await;
    let banana = app.create_food("Banana", &category_id).await;

    let body = json!({
        "action": "mark_as_organic",
        "ids": [apple["id"], banana["id"]]
    });
    let (status, response) = app.post("/api/v1/foods/bulk", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let result: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(result["updated"], 2);
    assert_eq!(
        result["message"],
        "2 food items were successfully marked as organic."
    );

    for food in [&apple, &banana] {
        let id = food["id"].as_str().unwrap();
        let (_, response) = app.get(&format!("/api/v1/foods/{}", id)).await;
        let detail: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(detail["is_organic"], true);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bulk_action_is_overwrite_not_toggle() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let category_id = fruits["id"].as_str().unwrap().to_string();
    let apple = app.create_food("Apple", &category_id).await;
    let banana = app.create_food("Banana", &category_id).await;

    // Start from mixed states
    app.put(
        &format!("/api/v1/foods/{}", banana["id"].as_str().unwrap()),
        &json!({ "is_active": false }).to_string(),
    )
    .await;

    let ids = json!([apple["id"], banana["id"]]);

    let body = json!({ "action": "make_active", "ids": ids.clone() });
    let (_, response) = app.post("/api/v1/foods/bulk", &body.to_string()).await;
    let result: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(result["updated"], 2);

    let body = json!({ "action": "make_inactive", "ids": ids });
    app.post("/api/v1/foods/bulk", &body.to_string()).await;

    // Every targeted record ends up inactive, regardless of prior state
    for food in [&apple, &banana] {
        let id = food["id"].as_str().unwrap();
        let (_, response) = app.get(&format!("/api/v1/foods/{}", id)).await;
        let detail: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(detail["is_active"], false);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bulk_action_skips_unknown_ids() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let apple = app.create_food("Apple", fruits["id"].as_str().unwrap()).await;

    let body = json!({
        "action": "make_inactive",
        "ids": [apple["id"], "00000000-0000-0000-0000-000000000000"]
    });
    let (status, response) = app.post("/api/v1/foods/bulk", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let result: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(result["updated"], 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_foods_filters() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let veg = app.create_category("Vegetables").await;
    let fruits_id = fruits["id"].as_str().unwrap().to_string();
    let veg_id = veg["id"].as_str().unwrap().to_string();

    let apple = app.create_food("Apple", &fruits_id).await;
    app.create_food("Banana", &fruits_id).await;
    app.create_food("Carrot", &veg_id).await;

    // Filter by category
    let (_, response) = app.get(&format!("/api/v1/foods?category_id={}", fruits_id)).await;
    let page: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(page["total"], 2);

    // Filter by organic flag
    app.post(
        "/api/v1/foods/bulk",
        &json!({ "action": "mark_as_organic", "ids": [apple["id"]] }).to_string(),
    )
    .await;
    let (_, response) = app.get("/api/v1/foods?is_organic=true").await;
    let page: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"][0]["name"], "Apple");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_foods_search_includes_category_name() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let veg = app.create_category("Vegetables").await;
    app.create_food("Apple", fruits["id"].as_str().unwrap()).await;
    app.create_food("Carrot", veg["id"].as_str().unwrap()).await;

    // Matches via the related category's name
    let (_, response) = app.get("/api/v1/foods?search=fruit").await;
    let page: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"][0]["name"], "Apple");

    // Matches via the item name
    let (_, response) = app.get("/api/v1/foods?search=carr").await;
    let page: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"][0]["name"], "Carrot");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_foods_sort_by_category() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let veg = app.create_category("Vegetables").await;
    app.create_food("Zucchini", veg["id"].as_str().unwrap()).await;
    app.create_food("Apple", fruits["id"].as_str().unwrap()).await;

    let (_, response) = app.get("/api/v1/foods?order_by=category").await;
    let page: Value = serde_json::from_str(&response).unwrap();
    let categories: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["category_name"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Fruits", "Vegetables"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_foods_pagination_envelope() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let fruits = app.create_category("Fruits").await;
    let category_id = fruits["id"].as_str().unwrap().to_string();
    for name in ["Apple", "Banana", "Cherry", "Date", "Elderberry"] {
        app.create_food(name, &category_id).await;
    }

    let (_, response) = app.get("/api/v1/foods?page=2&per_page=2").await;
    let page: Value = serde_json::from_str(&response).unwrap();

    assert_eq!(page["total"], 5);
    assert_eq!(page["page"], 2);
    assert_eq!(page["per_page"], 2);
    assert_eq!(page["total_pages"], 3);
    let names: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cherry", "Date"]);
}
