//! Application router configuration mapping the API routes to their handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    Error,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, update_category_endpoint,
    },
    endpoints,
    state::AppState,
    stores::CategoryStore,
};

/// Return a router with all the app's routes.
pub fn build_router<C>(state: AppState<C>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint::<C>).post(create_category_endpoint::<C>),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint::<C>)
                .put(update_category_endpoint::<C>)
                .delete(delete_category_endpoint::<C>),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Report that the server is up and serving requests.
async fn get_health() -> Response {
    (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
}

/// Requests for unknown paths get the JSON error body instead of an empty 404.
async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
