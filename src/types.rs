//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default page size for list endpoints
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Hard cap on page size
pub const MAX_PER_PAGE: u32 = 100;

/// Compute (limit, offset) from 1-based page parameters, clamping the
/// page size to [1, MAX_PER_PAGE]
pub fn page_bounds(page: u32, per_page: u32) -> (i64, i64) {
    let per_page = per_page.clamp(1, MAX_PER_PAGE) as i64;
    let page = page.max(1) as i64;
    (per_page, (page - 1) * per_page)
}

/// Total number of pages for a result set
pub fn total_pages(total: i64, per_page: u32) -> u32 {
    let per_page = per_page.clamp(1, MAX_PER_PAGE) as i64;
    ((total + per_page - 1) / per_page) as u32
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: u32, per_page: u32) -> Self {
        Self {
            data,
            total: total.max(0) as u64,
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            total_pages: total_pages(total, per_page),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sortable columns for category listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrderBy {
    #[default]
    Name,
    IsActive,
    CreatedAt,
    UpdatedAt,
    FoodCount,
}

/// Sortable columns for food listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodOrderBy {
    #[default]
    Name,
    Category,
    IsActive,
    IsOrganic,
    CreatedAt,
    UpdatedAt,
}

// ============================================================================
// Category Types
// ============================================================================

/// Query parameters for GET /categories
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListCategoriesQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub order_by: CategoryOrderBy,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListCategoriesQuery {
    fn default() -> Self {
        Self {
            search: None,
            is_active: None,
            created_from: None,
            created_to: None,
            order_by: CategoryOrderBy::default(),
            order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Create category request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial update request for a category; absent fields are unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Category response, including the live food count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub food_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Live food count for a category (Statistics panel)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCountResponse {
    pub food_count: i64,
}

// ============================================================================
// Food Types
// ============================================================================

/// Query parameters for GET /foods
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListFoodsQuery {
    pub search: Option<String>,
    pub category_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub is_organic: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub updated_from: Option<DateTime<Utc>>,
    pub updated_to: Option<DateTime<Utc>>,
    pub order_by: FoodOrderBy,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListFoodsQuery {
    fn default() -> Self {
        Self {
            search: None,
            category_id: None,
            is_active: None,
            is_organic: None,
            created_from: None,
            created_to: None,
            updated_from: None,
            updated_to: None,
            order_by: FoodOrderBy::default(),
            order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Create food request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    pub category_id: Uuid,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_organic: Option<bool>,
}

/// Partial update request for a food item; absent fields are unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFoodRequest {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_organic: Option<bool>,
}

/// Food item response, including the related category name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodResponse {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub is_organic: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Bulk Actions
// ============================================================================

/// Grouped bulk actions on food items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    MakeActive,
    MakeInactive,
    MarkAsOrganic,
    MarkAsNonOrganic,
}

/// Bulk update request: one action applied to a set of food item ids
#[derive(Debug, Clone, Deserialize)]
pub struct BulkUpdateRequest {
    pub action: BulkAction,
    pub ids: Vec<Uuid>,
}

/// Bulk update outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub action: BulkAction,
    pub updated: u64,
    pub message: String,
}
