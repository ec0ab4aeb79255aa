//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryId},
    stores::CategoryStore,
};

/// Creates and retrieves categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a category in the database.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategoryName] if `data.name` is already taken,
    /// otherwise an error if there is an SQL error.
    fn create(&self, data: CategoryData) -> Result<Category, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        connection.execute(
            "INSERT INTO category (name, description) VALUES (?1, ?2);",
            (&data.name, &data.description),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            name: data.name,
            description: data.description,
        })
    }

    /// Retrieve the category with `id` from the database, or `None` if no row matches.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare("SELECT id, name, description FROM category WHERE id = :id;")?
            .query_row(&[(":id", &id)], map_row)
            .optional()
            .map_err(|error| error.into())
    }

    /// Retrieve all categories in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare("SELECT id, name, description FROM category;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Check whether the database has a category with `id`.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn exists(&self, id: CategoryId) -> Result<bool, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        let mut statement =
            connection.prepare("SELECT EXISTS (SELECT 1 FROM category WHERE id = :id);")?;
        let exists: bool = statement.query_row(&[(":id", &id)], |row| row.get(0))?;

        Ok(exists)
    }

    /// Overwrite the name and description of the row with `category.id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingCategory] if no row has `category.id`.
    /// Returns [Error::DuplicateCategoryName] if the new name is already taken.
    fn update(&self, category: &Category) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .execute(
                "UPDATE category SET name = ?1, description = ?2 WHERE id = ?3;",
                (&category.name, &category.description, category.id),
            )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingCategory);
        }

        Ok(())
    }

    /// Delete the category with `id` from the database.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingCategory] if no row has `id`.
    fn delete(&self, id: CategoryId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .execute("DELETE FROM category WHERE id = ?1;", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingCategory);
        }

        Ok(())
    }
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let description = row.get(2)?;

    Ok(Category {
        id,
        name,
        description,
    })
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::create_category_table;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_category_table(&connection));
    }
}

#[cfg(test)]
mod category_store_tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        category::{Category, CategoryData},
    };

    use super::{CategoryStore, SQLiteCategoryStore, create_category_table};

    fn get_test_store() -> SQLiteCategoryStore {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).unwrap();

        SQLiteCategoryStore::new(Arc::new(Mutex::new(connection)))
    }

    fn category_data(name: &str, description: &str) -> CategoryData {
        CategoryData {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn create_category_succeeds() {
        let store = get_test_store();
        let data = category_data("Electronics", "Gadgets and Devices");

        let category = store.create(data.clone()).unwrap();

        assert!(category.id > 0);
        assert_eq!(category.name, data.name);
        assert_eq!(category.description, data.description);
    }

    #[test]
    fn create_category_with_taken_name_fails() {
        let store = get_test_store();
        store
            .create(category_data("Electronics", "Gadgets and Devices"))
            .unwrap();

        let result = store.create(category_data("Electronics", "Same name, new description"));

        assert_eq!(result, Err(Error::DuplicateCategoryName));
    }

    #[test]
    fn get_category_succeeds() {
        let store = get_test_store();
        let inserted_category = store
            .create(category_data("Clothing", "Apparel and Accessories"))
            .unwrap();

        let selected_category = store.get(inserted_category.id);

        assert_eq!(Ok(Some(inserted_category)), selected_category);
    }

    #[test]
    fn get_category_with_invalid_id_returns_none() {
        let store = get_test_store();
        let inserted_category = store
            .create(category_data("Clothing", "Apparel and Accessories"))
            .unwrap();

        let selected_category = store.get(inserted_category.id + 123);

        assert_eq!(selected_category, Ok(None));
    }

    #[test]
    fn get_all_categories() {
        let store = get_test_store();

        let inserted_categories = HashSet::from([
            store
                .create(category_data("Electronics", "Gadgets and Devices"))
                .unwrap(),
            store
                .create(category_data("Clothing", "Apparel and Accessories"))
                .unwrap(),
        ]);

        let selected_categories = store.get_all().unwrap();
        let selected_categories: HashSet<Category> = HashSet::from_iter(selected_categories);

        assert_eq!(inserted_categories, selected_categories);
    }

    #[test]
    fn exists_returns_true_for_inserted_category() {
        let store = get_test_store();
        let category = store
            .create(category_data("Electronics", "Gadgets and Devices"))
            .unwrap();

        assert_eq!(store.exists(category.id), Ok(true));
    }

    #[test]
    fn exists_returns_false_for_invalid_id() {
        let store = get_test_store();

        assert_eq!(store.exists(999999), Ok(false));
    }

    #[test]
    fn update_category_succeeds() {
        let store = get_test_store();
        let category = store
            .create(category_data("Electronics", "Gadgets and Devices"))
            .unwrap();

        let updated_category = Category {
            id: category.id,
            name: "Updated Electronics".to_string(),
            description: "Updated Description".to_string(),
        };
        let result = store.update(&updated_category);

        assert!(result.is_ok());
        assert_eq!(store.get(category.id), Ok(Some(updated_category)));
    }

    #[test]
    fn update_category_with_invalid_id_returns_not_found() {
        let store = get_test_store();

        let result = store.update(&Category {
            id: 999999,
            name: "Updated Electronics".to_string(),
            description: "Updated Description".to_string(),
        });

        assert_eq!(result, Err(Error::UpdateMissingCategory));
    }

    #[test]
    fn update_category_to_taken_name_fails() {
        let store = get_test_store();
        store
            .create(category_data("Electronics", "Gadgets and Devices"))
            .unwrap();
        let category = store
            .create(category_data("Clothing", "Apparel and Accessories"))
            .unwrap();

        let result = store.update(&Category {
            id: category.id,
            name: "Electronics".to_string(),
            description: category.description.clone(),
        });

        assert_eq!(result, Err(Error::DuplicateCategoryName));
    }

    #[test]
    fn delete_category_succeeds() {
        let store = get_test_store();
        let category = store
            .create(category_data("Electronics", "Gadgets and Devices"))
            .unwrap();

        let result = store.delete(category.id);

        assert!(result.is_ok());
        assert_eq!(store.get(category.id), Ok(None));
    }

    #[test]
    fn delete_category_with_invalid_id_returns_not_found() {
        let store = get_test_store();

        let result = store.delete(999999);

        assert_eq!(result, Err(Error::DeleteMissingCategory));
    }
}
