//! Profile Service - the singleton client profile

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::{Profile, ProfileInput};

use crate::store::SingletonStore;
use crate::utils::messages;
use crate::utils::validation::{validate_email, validate_password_strength, validate_required_text};

#[derive(Debug, Clone)]
pub struct ProfileService {
    store: SingletonStore<Profile>,
}

impl ProfileService {
    pub fn new(store: SingletonStore<Profile>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SingletonStore<Profile> {
        &self.store
    }

    pub fn get(&self) -> Arc<Profile> {
        self.store.get()
    }

    /// Validate and replace the profile
    ///
    /// Id resolution: the submitted id, else the stored id, else a fresh one.
    pub fn save(&self, mut input: ProfileInput) -> AppResult<Profile> {
        input.name = input.name.trim().to_string();
        input.email = input.email.trim().to_string();

        validate_required_text(&input.name, "name", messages::NAME_REQUIRED)?;
        validate_required_text(
            &input.contact_number,
            "contactNumber",
            messages::CONTACT_NUMBER_REQUIRED,
        )?;
        validate_required_text(
            &input.country_code,
            "countryCode",
            messages::COUNTRY_CODE_REQUIRED,
        )?;
        validate_email(&input.email, "email")?;
        validate_password_strength(&input.password, "password")?;

        let current = self.store.get();
        let id = if !input.id.trim().is_empty() {
            input.id.trim().to_string()
        } else if current.is_saved() {
            current.id.clone()
        } else {
            shared::util::generate_id()
        };

        let profile = Profile {
            id,
            name: input.name,
            email: input.email,
            contact_number: input.contact_number,
            country_code: input.country_code,
            password: input.password,
        };
        self.store.replace(profile.clone());
        tracing::info!(id = %profile.id, name = %profile.name, "Profile saved");
        Ok(profile)
    }
}
