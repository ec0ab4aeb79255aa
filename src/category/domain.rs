//! Core category domain types.

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A product category in the shop's catalogue (e.g., 'Electronics', 'Clothing').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The id for the category, assigned by the store.
    pub id: CategoryId,
    /// The display name. Unique across all categories.
    pub name: String,
    /// A short description of what belongs in the category.
    pub description: String,
}

/// Request body for category creation and editing.
///
/// Carries no id: the store assigns ids on creation, and updates take the
/// target id from the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    /// The display name for the category.
    pub name: String,
    /// A short description of what belongs in the category.
    pub description: String,
}
