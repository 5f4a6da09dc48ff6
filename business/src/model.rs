//! Records of the three source collections and the joined product view.
//!
//! Field names on the wire follow the JSON data files (`categoryId`, `ownerId`).

use std::fmt;

use serde::Deserialize;
use ustr::Ustr;

macro_rules! record_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(UserId);
record_id!(CategoryId);
record_id!(ProductId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Titles are compared on every filter pass, so they are interned.
    pub title: Ustr,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

/// A product with its category and the category owner resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    /// Text of the category column, e.g. `🍺 - Drinks`.
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }
}
