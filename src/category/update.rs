//! The endpoint for updating an existing category.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    auth::CallerRole,
    category::{Category, CategoryData, CategoryId},
    state::AppState,
    stores::CategoryStore,
};

/// A route handler for replacing the name and description of a category.
///
/// Only admins may update categories. This function will return the status
/// code 404 if no category has the requested ID, an update never creates a
/// category.
pub async fn update_category_endpoint<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<CategoryId>,
    role: CallerRole,
    Json(new_data): Json<CategoryData>,
) -> Result<Json<Category>, Error>
where
    C: CategoryStore + Send + Sync,
{
    state
        .category_service
        .update(&role, id, new_data)?
        .map(Json)
        .ok_or(Error::NotFound)
}
