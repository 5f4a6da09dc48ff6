use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CategoryId, ProductId, UserId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("product {product} refers to unknown category {category}")]
    DanglingCategory {
        product: ProductId,
        category: CategoryId,
    },
    #[error("category {category} refers to unknown owner {owner}")]
    DanglingOwner { category: CategoryId, owner: UserId },
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
}
