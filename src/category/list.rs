//! The endpoint for listing all categories.

use axum::{Json, extract::State};

use crate::{Error, category::Category, state::AppState, stores::CategoryStore};

/// A route handler for listing all categories.
///
/// Listing is open to any caller, no role is required.
pub async fn list_categories_endpoint<C>(
    State(state): State<AppState<C>>,
) -> Result<Json<Vec<Category>>, Error>
where
    C: CategoryStore + Send + Sync,
{
    state.category_service.list().map(Json)
}
