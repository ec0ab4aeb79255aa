//! Contains the trait and implementations for objects that store [categories](crate::Category).

mod sqlite;

pub use sqlite::{SQLiteCategoryStore, create_category_table};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryId},
};

/// Stores the product categories offered by the shop.
pub trait CategoryStore {
    /// Add a new category to the store and return it with its store-assigned ID.
    ///
    /// Any ID the caller has in mind is ignored, the store picks the next one.
    fn create(&self, data: CategoryData) -> Result<Category, Error>;

    /// Get the category with `id`, or `None` if no category has that ID.
    fn get(&self, id: CategoryId) -> Result<Option<Category>, Error>;

    /// Get all categories.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Check whether a category with `id` exists.
    fn exists(&self, id: CategoryId) -> Result<bool, Error>;

    /// Overwrite the name and description of the stored category with `category.id`.
    ///
    /// Never inserts: updating an ID that is not in the store is an error.
    fn update(&self, category: &Category) -> Result<(), Error>;

    /// Remove the category with `id` from the store.
    fn delete(&self, id: CategoryId) -> Result<(), Error>;
}
