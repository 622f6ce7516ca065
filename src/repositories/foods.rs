//! Food repository - database operations for food items

use crate::types::{FoodOrderBy, SortOrder};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food item from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRow {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_organic: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Food item joined with its category name, as shown in listings
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodWithCategory {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_organic: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new food item
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_organic: bool,
}

/// Full replacement values for a food item update
#[derive(Debug, Clone)]
pub struct UpdateFood {
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_organic: bool,
}

/// Listing filters; every field is optional and absent fields match all rows
#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    pub category_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub is_organic: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub updated_from: Option<DateTime<Utc>>,
    pub updated_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

const FILTER_CLAUSE: &str = r#"
    ($1::uuid IS NULL OR f.category_id = $1)
    AND ($2::boolean IS NULL OR f.is_active = $2)
    AND ($3::boolean IS NULL OR f.is_organic = $3)
    AND ($4::timestamptz IS NULL OR f.created_at >= $4)
    AND ($5::timestamptz IS NULL OR f.created_at <= $5)
    AND ($6::timestamptz IS NULL OR f.updated_at >= $6)
    AND ($7::timestamptz IS NULL OR f.updated_at <= $7)
    AND ($8::text IS NULL
         OR f.name ILIKE '%' || $8 || '%'
         OR f.description ILIKE '%' || $8 || '%'
         OR c.name ILIKE '%' || $8 || '%')
"#;

fn order_clause(order_by: FoodOrderBy, order: SortOrder) -> String {
    let column = match order_by {
        FoodOrderBy::Name => "f.name",
        FoodOrderBy::Category => "category_name",
        FoodOrderBy::IsActive => "f.is_active",
        FoodOrderBy::IsOrganic => "f.is_organic",
        FoodOrderBy::CreatedAt => "f.created_at",
        FoodOrderBy::UpdatedAt => "f.updated_at",
    };
    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    format!("{} {}, f.id ASC", column, direction)
}

/// Food item repository
pub struct FoodRepository;

impl FoodRepository {
    /// Create a new food item
    pub async fn create(db: &PgPool, input: CreateFood) -> Result<FoodRow> {
        let row = sqlx::query_as::<_, FoodRow>(
            r#"
            INSERT INTO food_item (name, category_id, description, is_active, is_organic)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, category_id, description, is_active, is_organic,
                      created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.is_active)
        .bind(input.is_organic)
        .fetch_one(db)
        .await?;

        Ok(row)
    }

    /// Find food item by ID
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<FoodRow>> {
        let row = sqlx::query_as::<_, FoodRow>(
            r#"
            SELECT id, name, category_id, description, is_active, is_organic,
                   created_at, updated_at
            FROM food_item
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Find food item by ID, joined with its category name
    pub async fn find_with_category(db: &PgPool, id: Uuid) -> Result<Option<FoodWithCategory>> {
        let row = sqlx::query_as::<_, FoodWithCategory>(
            r#"
            SELECT f.id, f.name, f.category_id, c.name AS category_name, f.description,
                   f.is_active, f.is_organic, f.created_at, f.updated_at
            FROM food_item f
            JOIN food_category c ON c.id = f.category_id
            WHERE f.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Find a food item by exact name within a category (uniqueness pre-check)
    pub async fn find_by_name_in_category(
        db: &PgPool,
        name: &str,
        category_id: Uuid,
    ) -> Result<Option<FoodRow>> {
        let row = sqlx::query_as::<_, FoodRow>(
            r#"
            SELECT id, name, category_id, description, is_active, is_organic,
                   created_at, updated_at
            FROM food_item
            WHERE name = $1 AND category_id = $2
            "#,
        )
        .bind(name)
        .bind(category_id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Replace a food item's mutable fields, refreshing updated_at
    pub async fn update(db: &PgPool, id: Uuid, input: UpdateFood) -> Result<Option<FoodRow>> {
        let row = sqlx::query_as::<_, FoodRow>(
            r#"
            UPDATE food_item
            SET name = $2, category_id = $3, description = $4,
                is_active = $5, is_organic = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, category_id, description, is_active, is_organic,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.is_active)
        .bind(input.is_organic)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Delete a food item
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM food_item WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List food items with their category names
    pub async fn list(
        db: &PgPool,
        filter: &FoodFilter,
        order_by: FoodOrderBy,
        order: SortOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FoodWithCategory>> {
        let sql = format!(
            r#"
            SELECT f.id, f.name, f.category_id, c.name AS category_name, f.description,
                   f.is_active, f.is_organic, f.created_at, f.updated_at
            FROM food_item f
            JOIN food_category c ON c.id = f.category_id
            WHERE {filter}
            ORDER BY {order}
            LIMIT $9 OFFSET $10
            "#,
            filter = FILTER_CLAUSE,
            order = order_clause(order_by, order),
        );

        let rows = sqlx::query_as::<_, FoodWithCategory>(&sql)
            .bind(filter.category_id)
            .bind(filter.is_active)
            .bind(filter.is_organic)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(filter.updated_from)
            .bind(filter.updated_to)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(db)
            .await?;

        Ok(rows)
    }

    /// Total number of food items matching the filter
    pub async fn count(db: &PgPool, filter: &FoodFilter) -> Result<i64> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM food_item f
            JOIN food_category c ON c.id = f.category_id
            WHERE {}
            "#,
            FILTER_CLAUSE
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(filter.category_id)
            .bind(filter.is_active)
            .bind(filter.is_organic)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(filter.updated_from)
            .bind(filter.updated_to)
            .bind(&filter.search)
            .fetch_one(db)
            .await?;

        Ok(count)
    }

    /// Set is_active on every matching row in one statement; returns the
    /// number of rows updated. Ids with no matching row contribute zero.
    pub async fn bulk_set_active(db: &PgPool, ids: &[Uuid], value: bool) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE food_item SET is_active = $1, updated_at = NOW() WHERE id = ANY($2)",
        )
        .bind(value)
        .bind(ids)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }

    /// Set is_organic on every matching row in one statement
    pub async fn bulk_set_organic(db: &PgPool, ids: &[Uuid], value: bool) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE food_item SET is_organic = $1, updated_at = NOW() WHERE id = ANY($2)",
        )
        .bind(value)
        .bind(ids)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }
}
