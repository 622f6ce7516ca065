//! Input validation functions
//!
//! Pure validation helpers shared by the services. Length limits match
//! the column definitions in the schema.

use validator::ValidateLength;

/// Maximum length of a category name, in characters
pub const CATEGORY_NAME_MAX_LEN: u64 = 100;

/// Maximum length of a food item name, in characters
pub const FOOD_NAME_MAX_LEN: u64 = 200;

/// Validate a category name
pub fn validate_category_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Category name cannot be empty".to_string());
    }
    if !name.validate_length(None, Some(CATEGORY_NAME_MAX_LEN), None) {
        return Err(format!(
            "Category name must be at most {} characters",
            CATEGORY_NAME_MAX_LEN
        ));
    }
    Ok(())
}

/// Validate a food item name
pub fn validate_food_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    if !name.validate_length(None, Some(FOOD_NAME_MAX_LEN), None) {
        return Err(format!(
            "Food name must be at most {} characters",
            FOOD_NAME_MAX_LEN
        ));
    }
    Ok(())
}

/// Normalize an optional description: empty or whitespace-only becomes None
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}
