//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selectable option on an item (e.g. "Large", +1.00)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChoice {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Menu item entity (菜品)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category reference (category id)
    pub category: String,
    /// Image as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Original file name of the image, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Whether the item offers choices
    #[serde(default)]
    pub selection: bool,
    #[serde(default)]
    pub choices: Vec<ItemChoice>,
}

/// Create / update item payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub selection: bool,
    #[serde(default)]
    pub choices: Vec<ItemChoice>,
}

impl Item {
    /// Build a record from a payload under the given id.
    ///
    /// Choices only survive when `selection` is on.
    pub fn from_input(id: impl Into<String>, input: ItemInput) -> Self {
        let choices = if input.selection {
            input.choices
        } else {
            Vec::new()
        };
        Self {
            id: id.into(),
            name: input.name,
            price: input.price,
            category: input.category,
            image: input.image.filter(|s| !s.is_empty()),
            image_name: input.image_name.filter(|s| !s.is_empty()),
            selection: input.selection,
            choices,
        }
    }
}
