//! Product catalog domain: records, the validated join, filter selections and
//! the visible-products compute consumed by the UI.

mod catalog;
mod config;
mod error;
mod filter;
pub mod model;
mod visible_products;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError};
pub use filter::{FilterAction, FilterState, UserFilter, filter_products};
pub use model::{
    Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId,
};
pub use visible_products::VisibleProducts;
