//! Food service - business logic for food items

use crate::error::{constraint_violation, ApiError, ConstraintKind};
use crate::repositories::{
    CategoryRepository, CreateFood, FoodFilter, FoodRepository, FoodRow, FoodWithCategory,
    UpdateFood,
};
use crate::types::{page_bounds, BulkAction, CreateFoodRequest, ListFoodsQuery, UpdateFoodRequest};
use crate::validation::{normalize_description, validate_food_name};
use sqlx::PgPool;
use uuid::Uuid;

fn duplicate_pair_error(name: &str) -> ApiError {
    ApiError::Validation(format!(
        "A food item named \"{}\" already exists in this category",
        name
    ))
}

fn missing_category_error() -> ApiError {
    ApiError::Validation("Category does not exist".to_string())
}

/// Confirmation message reported after a bulk action
pub fn bulk_message(action: BulkAction, updated: u64) -> String {
    let label = match action {
        BulkAction::MakeActive => "active",
        BulkAction::MakeInactive => "inactive",
        BulkAction::MarkAsOrganic => "organic",
        BulkAction::MarkAsNonOrganic => "non-organic",
    };
    format!(
        "{} food items were successfully marked as {}.",
        updated, label
    )
}

/// Food service
pub struct FoodService;

impl FoodService {
    /// Create a new food item in an existing category
    pub async fn create(db: &PgPool, req: CreateFoodRequest) -> Result<FoodWithCategory, ApiError> {
        validate_food_name(&req.name).map_err(ApiError::Validation)?;

        // A bad category reference is correctable input, not a missing
        // addressed record.
        let category = CategoryRepository::find_by_id(db, req.category_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(missing_category_error)?;

        if FoodRepository::find_by_name_in_category(db, &req.name, req.category_id)
            .await
            .map_err(ApiError::Internal)?
            .is_some()
        {
            return Err(duplicate_pair_error(&req.name));
        }

        let input = CreateFood {
            name: req.name,
            category_id: req.category_id,
            description: normalize_description(req.description),
            is_active: req.is_active.unwrap_or(true),
            is_organic: req.is_organic.unwrap_or(false),
        };

        let row = FoodRepository::create(db, input.clone())
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintKind::Unique) => duplicate_pair_error(&input.name),
                Some(ConstraintKind::ForeignKey) => missing_category_error(),
                None => ApiError::Internal(e),
            })?;

        Ok(with_category(row, category.name))
    }

    /// Fetch a food item with its category name
    pub async fn get(db: &PgPool, id: Uuid) -> Result<FoodWithCategory, ApiError> {
        FoodRepository::find_with_category(db, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))
    }

    /// Apply a partial update; absent fields keep their current values.
    /// The category may be reassigned, but only to an existing category.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        req: UpdateFoodRequest,
    ) -> Result<FoodWithCategory, ApiError> {
        let existing = FoodRepository::find_by_id(db, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

        let name = req.name.unwrap_or(existing.name);
        validate_food_name(&name).map_err(ApiError::Validation)?;

        let category_id = req.category_id.unwrap_or(existing.category_id);
        let category = CategoryRepository::find_by_id(db, category_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(missing_category_error)?;

        if let Some(other) = FoodRepository::find_by_name_in_category(db, &name, category_id)
            .await
            .map_err(ApiError::Internal)?
        {
            if other.id != id {
                return Err(duplicate_pair_error(&name));
            }
        }

        let input = UpdateFood {
            name,
            category_id,
            description: match req.description {
                Some(d) => normalize_description(Some(d)),
                None => existing.description,
            },
            is_active: req.is_active.unwrap_or(existing.is_active),
            is_organic: req.is_organic.unwrap_or(existing.is_organic),
        };

        let row = FoodRepository::update(db, id, input.clone())
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintKind::Unique) => duplicate_pair_error(&input.name),
                Some(ConstraintKind::ForeignKey) => missing_category_error(),
                None => ApiError::Internal(e),
            })?
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

        Ok(with_category(row, category.name))
    }

    /// Delete a food item
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = FoodRepository::delete(db, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food item not found".to_string()));
        }

        Ok(())
    }

    /// List food items; returns the page of rows plus the unpaginated total
    pub async fn list(
        db: &PgPool,
        query: &ListFoodsQuery,
    ) -> Result<(Vec<FoodWithCategory>, i64), ApiError> {
        let filter = FoodFilter {
            category_id: query.category_id,
            is_active: query.is_active,
            is_organic: query.is_organic,
            created_from: query.created_from,
            created_to: query.created_to,
            updated_from: query.updated_from,
            updated_to: query.updated_to,
            search: query.search.clone(),
        };
        let (limit, offset) = page_bounds(query.page, query.per_page);

        let rows = FoodRepository::list(db, &filter, query.order_by, query.order, limit, offset)
            .await
            .map_err(ApiError::Internal)?;
        let total = FoodRepository::count(db, &filter)
            .await
            .map_err(ApiError::Internal)?;

        Ok((rows, total))
    }

    /// Apply a bulk action to a set of food item ids in one statement.
    ///
    /// Idempotent overwrite, not a toggle: every matched row ends up with
    /// the action's target value. Ids without a matching row are silently
    /// excluded from the returned count; an empty id set updates nothing.
    pub async fn bulk_update(db: &PgPool, action: BulkAction, ids: &[Uuid]) -> Result<u64, ApiError> {
        let updated = match action {
            BulkAction::MakeActive => FoodRepository::bulk_set_active(db, ids, true).await,
            BulkAction::MakeInactive => FoodRepository::bulk_set_active(db, ids, false).await,
            BulkAction::MarkAsOrganic => FoodRepository::bulk_set_organic(db, ids, true).await,
            BulkAction::MarkAsNonOrganic => FoodRepository::bulk_set_organic(db, ids, false).await,
        }
        .map_err(ApiError::Internal)?;

        Ok(updated)
    }
}

fn with_category(row: FoodRow, category_name: String) -> FoodWithCategory {
    FoodWithCategory {
        id: row.id,
        name: row.name,
        category_id: row.category_id,
        category_name,
        description: row.description,
        is_active: row.is_active,
        is_organic: row.is_organic,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
