//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub seats: u32,
}

/// Create / update dining table payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTableInput {
    pub name: String,
    pub seats: u32,
}

impl Default for DiningTableInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            seats: 1,
        }
    }
}

impl DiningTable {
    pub fn from_input(id: impl Into<String>, input: DiningTableInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            seats: input.seats,
        }
    }
}
