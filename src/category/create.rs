//! The endpoint for creating a new category.

use axum::{Json, extract::State};

use crate::{
    Error,
    auth::CallerRole,
    category::{Category, CategoryData},
    state::AppState,
    stores::CategoryStore,
};

/// A route handler for creating a new category.
///
/// Only admins may create categories. The ID of the new category is assigned
/// by the store, an ID in the request body is ignored.
pub async fn create_category_endpoint<C>(
    State(state): State<AppState<C>>,
    role: CallerRole,
    Json(new_category): Json<CategoryData>,
) -> Result<Json<Category>, Error>
where
    C: CategoryStore + Send + Sync,
{
    state.category_service.create(&role, new_category).map(Json)
}
