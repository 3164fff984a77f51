//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity (菜品分类)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Create / update category payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}

impl Category {
    /// Build a record from a payload under the given id
    pub fn from_input(id: impl Into<String>, input: CategoryInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
        }
    }
}

/// Built-in categories present on a fresh start, with their fixed ids
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("1", "Dishes"),
    ("2", "Drinks"),
    ("3", "Cakes"),
    ("4", "Promo"),
    ("5", "Special"),
    ("6", "Add On"),
];

/// The seeded category collection
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}
