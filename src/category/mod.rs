//! Category management for the shop's product catalogue.

mod create;
mod delete;
mod domain;
mod get;
mod list;
mod service;
mod update;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryData, CategoryId};
pub use get::get_category_endpoint;
pub use list::list_categories_endpoint;
pub use service::CategoryService;
pub use update::update_category_endpoint;
