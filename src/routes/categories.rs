//! Category API routes

use crate::error::ApiError;
use crate::repositories::{CategoryRow, CategoryWithCount};
use crate::services::CategoryService;
use crate::state::AppState;
use crate::types::{
    CategoryResponse, CreateCategoryRequest, FoodCountResponse, ListCategoriesQuery,
    PaginatedResponse, UpdateCategoryRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/:id/food-count", get(get_food_count))
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid category ID".to_string()))
}

fn to_response(row: CategoryRow, food_count: i64) -> CategoryResponse {
    CategoryResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        is_active: row.is_active,
        food_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn listing_to_response(row: CategoryWithCount) -> CategoryResponse {
    CategoryResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        is_active: row.is_active,
        food_count: row.food_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// GET /api/v1/categories - List categories with filters, search, and sorting
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<PaginatedResponse<CategoryResponse>>, ApiError> {
    let (rows, total) = CategoryService::list(state.db(), &query).await?;

    let data: Vec<CategoryResponse> = rows.into_iter().map(listing_to_response).collect();

    Ok(Json(PaginatedResponse::new(
        data,
        total,
        query.page,
        query.per_page,
    )))
}

/// POST /api/v1/categories - Create a category
async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let row = CategoryService::create(state.db(), req).await?;

    // A fresh category has no food items yet
    Ok((StatusCode::CREATED, Json(to_response(row, 0))))
}

/// GET /api/v1/categories/:id - Category detail with live food count
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let id = parse_id(&id)?;
    let (row, food_count) = CategoryService::get(state.db(), id).await?;

    Ok(Json(to_response(row, food_count)))
}

/// PUT /api/v1/categories/:id - Partial update
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let id = parse_id(&id)?;
    let (row, food_count) = CategoryService::update(state.db(), id, req).await?;

    Ok(Json(to_response(row, food_count)))
}

/// GET /api/v1/categories/:id/food-count - Live count of referencing foods
async fn get_food_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodCountResponse>, ApiError> {
    let id = parse_id(&id)?;
    let food_count = CategoryService::food_count(state.db(), id).await?;

    Ok(Json(FoodCountResponse { food_count }))
}

/// DELETE /api/v1/categories/:id - Delete a category and its food items
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let id = parse_id(&id)?;
    CategoryService::delete(state.db(), id).await?;

    Ok(Json(()))
}
