//! The joined, read-only product catalog.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use catalog_states::State;
use log::info;
use serde::de::DeserializeOwned;

use crate::model::{Category, CategoryId, EnrichedProduct, Product, User, UserId};
use crate::{CatalogConfig, CatalogError};

const SAMPLE_USERS: &str = include_str!("../data/users.json");
const SAMPLE_CATEGORIES: &str = include_str!("../data/categories.json");
const SAMPLE_PRODUCTS: &str = include_str!("../data/products.json");

/// Users, categories and the products joined against them.
///
/// Built once at startup and never mutated afterwards. Product order is the
/// order of the source product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Resolves every product's category and every category's owner.
    pub fn join(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        let mut users_by_id: HashMap<UserId, &User> = HashMap::with_capacity(users.len());
        for user in &users {
            if users_by_id.insert(user.id, user).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "user",
                    id: user.id.0,
                });
            }
        }

        let mut categories_by_id: HashMap<CategoryId, (&Category, &User)> =
            HashMap::with_capacity(categories.len());
        for category in &categories {
            let owner = users_by_id
                .get(&category.owner_id)
                .copied()
                .ok_or(CatalogError::DanglingOwner {
                    category: category.id,
                    owner: category.owner_id,
                })?;
            if categories_by_id
                .insert(category.id, (category, owner))
                .is_some()
            {
                return Err(CatalogError::DuplicateId {
                    kind: "category",
                    id: category.id.0,
                });
            }
        }

        let mut seen_products = HashSet::with_capacity(products.len());
        let mut enriched = Vec::with_capacity(products.len());
        for product in products {
            if !seen_products.insert(product.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "product",
                    id: product.id.0,
                });
            }
            let &(category, user) = categories_by_id.get(&product.category_id).ok_or(
                CatalogError::DanglingCategory {
                    product: product.id,
                    category: product.category_id,
                },
            )?;
            enriched.push(EnrichedProduct {
                id: product.id,
                name: product.name,
                category: category.clone(),
                user: user.clone(),
            });
        }

        Ok(Self {
            users,
            categories,
            products: enriched,
        })
    }

    /// Parses the three collections from JSON arrays and joins them.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, CatalogError> {
        Self::join(
            parse("users", users)?,
            parse("categories", categories)?,
            parse("products", products)?,
        )
    }

    /// The data set compiled into the crate.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_USERS, SAMPLE_CATEGORIES, SAMPLE_PRODUCTS)
    }

    /// Reads `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let users = read(&dir.join("users.json"))?;
        let categories = read(&dir.join("categories.json"))?;
        let products = read(&dir.join("products.json"))?;
        Self::from_json(&users, &categories, &products)
    }

    /// Loads the catalog the configuration points at.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match config.data_dir() {
            Some(dir) => {
                info!("Loading catalog from {}", dir.display());
                Self::load_dir(dir)?
            }
            None => {
                info!("Loading built-in sample catalog");
                Self::sample()?
            }
        };
        info!(
            "Catalog ready: {} users, {} categories, {} products",
            catalog.users.len(),
            catalog.categories.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}

impl State for Catalog {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { name, source })
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
