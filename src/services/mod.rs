//! Business logic services
//!
//! Services encapsulate validation and the uniqueness/reference rules,
//! coordinating between the HTTP layer and the repositories.

pub mod categories;
pub mod foods;

pub use categories::CategoryService;
pub use foods::{bulk_message, FoodService};
