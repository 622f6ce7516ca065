//! Food item API routes

use crate::error::ApiError;
use crate::repositories::FoodWithCategory;
use crate::services::{bulk_message, FoodService};
use crate::state::AppState;
use crate::types::{
    BulkUpdateRequest, BulkUpdateResponse, CreateFoodRequest, FoodResponse, ListFoodsQuery,
    PaginatedResponse, UpdateFoodRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

/// Create food routes
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods).post(create_food))
        .route("/:id", get(get_food).put(update_food).delete(delete_food))
        .route("/bulk", post(bulk_update))
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid food ID".to_string()))
}

fn to_response(row: FoodWithCategory) -> FoodResponse {
    FoodResponse {
        id: row.id,
        name: row.name,
        category_id: row.category_id,
        category_name: row.category_name,
        description: row.description,
        is_active: row.is_active,
        is_organic: row.is_organic,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// GET /api/v1/foods - List food items with filters, search, and sorting
async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<ListFoodsQuery>,
) -> Result<Json<PaginatedResponse<FoodResponse>>, ApiError> {
    let (rows, total) = FoodService::list(state.db(), &query).await?;

    let data: Vec<FoodResponse> = rows.into_iter().map(to_response).collect();

    Ok(Json(PaginatedResponse::new(
        data,
        total,
        query.page,
        query.per_page,
    )))
}

/// POST /api/v1/foods - Create a food item
async fn create_food(
    State(state): State<AppState>,
    Json(req): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodResponse>), ApiError> {
    let row = FoodService::create(state.db(), req).await?;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// GET /api/v1/foods/:id - Food item detail
async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodResponse>, ApiError> {
    let id = parse_id(&id)?;
    let row = FoodService::get(state.db(), id).await?;

    Ok(Json(to_response(row)))
}

/// PUT /api/v1/foods/:id - Partial update, including category reassignment
async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFoodRequest>,
) -> Result<Json<FoodResponse>, ApiError> {
    let id = parse_id(&id)?;
    let row = FoodService::update(state.db(), id, req).await?;

    Ok(Json(to_response(row)))
}

/// DELETE /api/v1/foods/:id - Delete a food item
async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let id = parse_id(&id)?;
    FoodService::delete(state.db(), id).await?;

    Ok(Json(()))
}

/// POST /api/v1/foods/bulk - Apply one bulk action to a set of ids
///
/// Always reports a count; ids with no matching record are silently
/// excluded from it.
async fn bulk_update(
    State(state): State<AppState>,
    Json(req): Json<BulkUpdateRequest>,
) -> Result<Json<BulkUpdateResponse>, ApiError> {
    let updated = FoodService::bulk_update(state.db(), req.action, &req.ids).await?;

    Ok(Json(BulkUpdateResponse {
        action: req.action,
        updated,
        message: bulk_message(req.action, updated),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("").is_err());
        assert!(parse_id("123").is_err());
        assert!(parse_id("8e2ba09c-9537-4655-bbb9-3bd902dcd525").is_ok());
    }
}
