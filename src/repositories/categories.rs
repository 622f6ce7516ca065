//! Category repository - database operations for food categories

use crate::types::{CategoryOrderBy, SortOrder};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food category from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category row joined with its live food count, as shown in listings
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryWithCount {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub food_count: i64,
}

/// Input for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Full replacement values for a category update
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Listing filters; every field is optional and absent fields match all rows
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub is_active: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

const FILTER_CLAUSE: &str = r#"
    ($1::boolean IS NULL OR c.is_active = $1)
    AND ($2::timestamptz IS NULL OR c.created_at >= $2)
    AND ($3::timestamptz IS NULL OR c.created_at <= $3)
    AND ($4::text IS NULL
         OR c.name ILIKE '%' || $4 || '%'
         OR c.description ILIKE '%' || $4 || '%')
"#;

fn order_clause(order_by: CategoryOrderBy, order: SortOrder) -> String {
    let column = match order_by {
        CategoryOrderBy::Name => "c.name",
        CategoryOrderBy::IsActive => "c.is_active",
        CategoryOrderBy::CreatedAt => "c.created_at",
        CategoryOrderBy::UpdatedAt => "c.updated_at",
        CategoryOrderBy::FoodCount => "food_count",
    };
    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    // id as a stable tiebreak
    format!("{} {}, c.id ASC", column, direction)
}

/// Category repository
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category
    pub async fn create(db: &PgPool, input: CreateCategory) -> Result<CategoryRow> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO food_category (name, description, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.is_active)
        .fetch_one(db)
        .await?;

        Ok(row)
    }

    /// Find category by ID
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM food_category
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Find category by exact name (uniqueness is case-sensitive)
    pub async fn find_by_name(db: &PgPool, name: &str) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM food_category
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Replace a category's mutable fields, refreshing updated_at
    pub async fn update(db: &PgPool, id: Uuid, input: UpdateCategory) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE food_category
            SET name = $2, description = $3, is_active = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.is_active)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Delete a category; referencing food items go with it (ON DELETE CASCADE)
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM food_category WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List categories with their live food counts
    pub async fn list(
        db: &PgPool,
        filter: &CategoryFilter,
        order_by: CategoryOrderBy,
        order: SortOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CategoryWithCount>> {
        let sql = format!(
            r#"
            SELECT c.id, c.name, c.description, c.is_active, c.created_at, c.updated_at,
                   (SELECT COUNT(*) FROM food_item f WHERE f.category_id = c.id) AS food_count
            FROM food_category c
            WHERE {filter}
            ORDER BY {order}
            LIMIT $5 OFFSET $6
            "#,
            filter = FILTER_CLAUSE,
            order = order_clause(order_by, order),
        );

        let rows = sqlx::query_as::<_, CategoryWithCount>(&sql)
            .bind(filter.is_active)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(db)
            .await?;

        Ok(rows)
    }

    /// Total number of categories matching the filter
    pub async fn count(db: &PgPool, filter: &CategoryFilter) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM food_category c WHERE {}",
            FILTER_CLAUSE
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(filter.is_active)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(&filter.search)
            .fetch_one(db)
            .await?;

        Ok(count)
    }

    /// Number of food items currently referencing the category
    pub async fn food_count(db: &PgPool, id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM food_item WHERE category_id = $1")
                .bind(id)
                .fetch_one(db)
                .await?;

        Ok(count)
    }
}
