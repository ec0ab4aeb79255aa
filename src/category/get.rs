//! The endpoint for fetching a single category by its ID.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    category::{Category, CategoryId},
    state::AppState,
    stores::CategoryStore,
};

/// A route handler for getting a category by its database ID.
///
/// Fetching is open to any caller, no role is required. This function will
/// return the status code 404 if no category has the requested ID.
pub async fn get_category_endpoint<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>, Error>
where
    C: CategoryStore + Send + Sync,
{
    state
        .category_service
        .get(id)?
        .map(Json)
        .ok_or(Error::NotFound)
}
