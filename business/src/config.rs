use std::env::vars;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;

const DEFAULT_TITLE: &str = "Product Categories";

/// Application settings read from the process environment.
///
/// - `CATALOG_DATA_DIR`: directory holding `users.json`, `categories.json`
///   and `products.json`. The built-in sample data is used when unset.
/// - `CATALOG_TITLE`: window title and page heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    data_dir: Option<PathBuf>,
    title: String,
}

#[derive(Deserialize)]
struct RawConfig {
    catalog_data_dir: Option<PathBuf>,
    catalog_title: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(iter).map_err(|err| ConfigError::Env(err.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        Self {
            data_dir: raw.catalog_data_dir,
            title: raw
                .catalog_title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}
