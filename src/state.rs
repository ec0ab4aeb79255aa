//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::{category::CategoryService, stores::CategoryStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C>
where
    C: CategoryStore + Send + Sync,
{
    /// The service for managing [categories](crate::Category).
    pub category_service: CategoryService<C>,
}

impl<C> AppState<C>
where
    C: CategoryStore + Send + Sync,
{
    /// Create a new [AppState] with a category store.
    pub fn new(category_store: C) -> Self {
        Self {
            category_service: CategoryService::new(category_store),
        }
    }
}
