//! Profile Model

use serde::{Deserialize, Serialize};

use super::outlet::DEFAULT_COUNTRY_CODE;

/// Client profile (singleton, not a collection)
///
/// An empty `id` means the profile has never been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub country_code: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Profile {
    /// An unsaved profile with the given default dialling code
    pub fn empty(country_code: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            contact_number: String::new(),
            country_code: country_code.into(),
            password: String::new(),
        }
    }

    pub fn is_saved(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty(DEFAULT_COUNTRY_CODE)
    }
}

/// Profile save payload
///
/// `id` may be empty; the service keeps the stored id or assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub country_code: String,
    pub password: String,
}
