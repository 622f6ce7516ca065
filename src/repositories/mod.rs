//! Database repositories
//!
//! Provides the data access layer for database operations.

pub mod categories;
pub mod foods;

pub use categories::{
    CategoryFilter, CategoryRepository, CategoryRow, CategoryWithCount, CreateCategory,
    UpdateCategory,
};
pub use foods::{CreateFood, FoodFilter, FoodRepository, FoodRow, FoodWithCategory, UpdateFood};
