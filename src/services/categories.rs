//! Category service - business logic for food categories

use crate::error::{constraint_violation, ApiError, ConstraintKind};
use crate::repositories::{
    CategoryFilter, CategoryRepository, CategoryRow, CategoryWithCount, CreateCategory,
    UpdateCategory,
};
use crate::types::{page_bounds, CreateCategoryRequest, ListCategoriesQuery, UpdateCategoryRequest};
use crate::validation::{normalize_description, validate_category_name};
use sqlx::PgPool;
use uuid::Uuid;

fn duplicate_name_error(name: &str) -> ApiError {
    ApiError::Validation(format!("A category named \"{}\" already exists", name))
}

/// Category service
pub struct CategoryService;

impl CategoryService {
    /// Create a new category
    pub async fn create(db: &PgPool, req: CreateCategoryRequest) -> Result<CategoryRow, ApiError> {
        validate_category_name(&req.name).map_err(ApiError::Validation)?;

        // Pre-check for a friendlier message; the unique constraint is the
        // actual guarantee.
        if CategoryRepository::find_by_name(db, &req.name)
            .await
            .map_err(ApiError::Internal)?
            .is_some()
        {
            return Err(duplicate_name_error(&req.name));
        }

        let input = CreateCategory {
            name: req.name,
            description: normalize_description(req.description),
            is_active: req.is_active.unwrap_or(true),
        };

        CategoryRepository::create(db, input.clone())
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintKind::Unique) => duplicate_name_error(&input.name),
                _ => ApiError::Internal(e),
            })
    }

    /// Fetch a category with its live food count
    pub async fn get(db: &PgPool, id: Uuid) -> Result<(CategoryRow, i64), ApiError> {
        let row = CategoryRepository::find_by_id(db, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        let count = CategoryRepository::food_count(db, id)
            .await
            .map_err(ApiError::Internal)?;

        Ok((row, count))
    }

    /// Apply a partial update; absent fields keep their current values
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        req: UpdateCategoryRequest,
    ) -> Result<(CategoryRow, i64), ApiError> {
        let existing = CategoryRepository::find_by_id(db, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        let name = req.name.unwrap_or_else(|| existing.name.clone());
        validate_category_name(&name).map_err(ApiError::Validation)?;

        if name != existing.name {
            if let Some(other) = CategoryRepository::find_by_name(db, &name)
                .await
                .map_err(ApiError::Internal)?
            {
                if other.id != id {
                    return Err(duplicate_name_error(&name));
                }
            }
        }

        let input = UpdateCategory {
            name,
            description: match req.description {
                Some(d) => normalize_description(Some(d)),
                None => existing.description,
            },
            is_active: req.is_active.unwrap_or(existing.is_active),
        };

        let row = CategoryRepository::update(db, id, input.clone())
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintKind::Unique) => duplicate_name_error(&input.name),
                _ => ApiError::Internal(e),
            })?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        let count = CategoryRepository::food_count(db, id)
            .await
            .map_err(ApiError::Internal)?;

        Ok((row, count))
    }

    /// Delete a category and, via the cascade, every food item in it
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = CategoryRepository::delete(db, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }

    /// List categories; returns the page of rows plus the unpaginated total
    pub async fn list(
        db: &PgPool,
        query: &ListCategoriesQuery,
    ) -> Result<(Vec<CategoryWithCount>, i64), ApiError> {
        let filter = CategoryFilter {
            is_active: query.is_active,
            created_from: query.created_from,
            created_to: query.created_to,
            search: query.search.clone(),
        };
        let (limit, offset) = page_bounds(query.page, query.per_page);

        let rows =
            CategoryRepository::list(db, &filter, query.order_by, query.order, limit, offset)
                .await
                .map_err(ApiError::Internal)?;
        let total = CategoryRepository::count(db, &filter)
            .await
            .map_err(ApiError::Internal)?;

        Ok((rows, total))
    }

    /// Live count of food items in the category
    pub async fn food_count(db: &PgPool, id: Uuid) -> Result<i64, ApiError> {
        CategoryRepository::find_by_id(db, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        CategoryRepository::food_count(db, id)
            .await
            .map_err(ApiError::Internal)
    }
}
