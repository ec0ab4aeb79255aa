//! The endpoint for deleting a category.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error, auth::CallerRole, category::CategoryId, state::AppState, stores::CategoryStore,
};

/// A route handler for deleting a category by its database ID.
///
/// Only admins may delete categories. Responds with the status code 204 and
/// an empty body once the category is gone, or 404 if no category has the
/// requested ID.
pub async fn delete_category_endpoint<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<CategoryId>,
    role: CallerRole,
) -> Result<StatusCode, Error>
where
    C: CategoryStore + Send + Sync,
{
    if state.category_service.delete(&role, id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound)
    }
}
