//! Business rules for managing categories.
//!
//! All category reads and writes go through [CategoryService], which enforces
//! the admin requirement on every operation that changes data. Reads are open
//! to any caller.

use crate::{
    Error,
    auth::{CallerRole, require_admin},
    category::domain::{Category, CategoryData, CategoryId},
    stores::CategoryStore,
};

/// Coordinates the role check and the category store for the five category
/// operations.
#[derive(Debug, Clone)]
pub struct CategoryService<S>
where
    S: CategoryStore,
{
    store: S,
}

impl<S> CategoryService<S>
where
    S: CategoryStore,
{
    /// Create a category service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get every category in the store.
    pub fn list(&self) -> Result<Vec<Category>, Error> {
        self.store.get_all()
    }

    /// Get the category with `id`, or `None` if no category has that ID.
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.store.get(id)
    }

    /// Add a new category to the store. The returned category carries the ID
    /// the store assigned to it.
    ///
    /// # Errors
    /// Returns [Error::AccessDenied] if `role` is not the admin role, in
    /// which case nothing is written to the store.
    /// Returns [Error::DuplicateCategoryName] if `data.name` is already taken.
    pub fn create(&self, role: &CallerRole, data: CategoryData) -> Result<Category, Error> {
        require_admin(role)?;

        self.store.create(data)
    }

    /// Replace the name and description of the category with `id`, keeping
    /// its ID.
    ///
    /// Returns `Ok(None)` if no category has `id`. An update never creates a
    /// category.
    ///
    /// # Errors
    /// Returns [Error::AccessDenied] if `role` is not the admin role, in
    /// which case nothing is written to the store.
    /// Returns [Error::DuplicateCategoryName] if `data.name` belongs to
    /// another category.
    pub fn update(
        &self,
        role: &CallerRole,
        id: CategoryId,
        data: CategoryData,
    ) -> Result<Option<Category>, Error> {
        require_admin(role)?;

        let Some(mut category) = self.store.get(id)? else {
            return Ok(None);
        };

        category.name = data.name;
        category.description = data.description;
        self.store.update(&category)?;

        Ok(Some(category))
    }

    /// Remove the category with `id` from the store.
    ///
    /// Returns `true` once the category has been removed, or `false` if no
    /// category has `id`.
    ///
    /// # Errors
    /// Returns [Error::AccessDenied] if `role` is not the admin role, in
    /// which case nothing is removed.
    pub fn delete(&self, role: &CallerRole, id: CategoryId) -> Result<bool, Error> {
        require_admin(role)?;

        if !self.store.exists(id)? {
            return Ok(false);
        }

        self.store.delete(id)?;

        Ok(true)
    }
}
