//! Profile editor
//!
//! The profile form is always shown. Once saved it turns read-only until
//! `edit()` is called again.

use shared::error::{AppError, AppResult};
use shared::models::{Profile, ProfileInput};

use super::schema::{CharClass, FieldError, FieldSchema, FormSchema, FormValues, Rule};
use crate::services::ProfileService;
use crate::utils::messages;

pub struct ProfileEditor {
    service: ProfileService,
    schema: FormSchema,
    values: FormValues,
    editable: bool,
    error: Option<FieldError>,
}

impl ProfileEditor {
    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::NAME_REQUIRED),
            FieldSchema::text("contactNumber").required(messages::CONTACT_NUMBER_REQUIRED),
            FieldSchema::text("countryCode").required(messages::COUNTRY_CODE_REQUIRED),
            FieldSchema::text("email")
                .required(messages::EMAIL_REQUIRED)
                .rule(Rule::Email(messages::EMAIL_INVALID)),
            FieldSchema::text("password")
                .required(messages::PASSWORD_TOO_SHORT)
                .rule(Rule::MinLength(messages::PASSWORD_MIN_LEN, messages::PASSWORD_TOO_SHORT))
                .rule(Rule::Contains(CharClass::Uppercase, messages::PASSWORD_NEEDS_UPPERCASE))
                .rule(Rule::Contains(CharClass::Lowercase, messages::PASSWORD_NEEDS_LOWERCASE))
                .rule(Rule::Contains(CharClass::Digit, messages::PASSWORD_NEEDS_DIGIT))
                .rule(Rule::Contains(CharClass::Special, messages::PASSWORD_NEEDS_SPECIAL)),
        ])
    }

    /// Load the stored profile; an unsaved profile starts editable
    pub fn new(service: ProfileService) -> Self {
        let profile = service.get();
        Self {
            values: Self::values_from(&profile),
            editable: !profile.is_saved(),
            schema: Self::schema(),
            error: None,
            service,
        }
    }

    fn values_from(profile: &Profile) -> FormValues {
        FormValues::new()
            .with_text("id", profile.id.as_str())
            .with_text("name", profile.name.as_str())
            .with_text("email", profile.email.as_str())
            .with_text("contactNumber", profile.contact_number.as_str())
            .with_text("countryCode", profile.country_code.as_str())
            .with_text("password", profile.password.as_str())
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Unlock the form
    pub fn edit(&mut self) {
        self.editable = true;
    }

    /// Put a fresh client id on the form
    pub fn generate_id(&mut self) -> AppResult<String> {
        self.ensure_editable()?;
        let id = shared::util::generate_id();
        self.values.set_text("id", id.as_str());
        Ok(id)
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        self.ensure_editable()?;
        self.values.set_text(field, value);
        if self.error.as_ref().is_some_and(|e| e.field == field) {
            self.error = None;
        }
        Ok(())
    }

    /// Discard edits and reload the stored profile
    pub fn cancel(&mut self) {
        let profile = self.service.get();
        self.values = Self::values_from(&profile);
        self.editable = !profile.is_saved();
        self.error = None;
    }

    /// Validate and save; the form turns read-only on success
    pub fn submit(&mut self) -> AppResult<Profile> {
        self.ensure_editable()?;
        self.error = None;

        if let Err(field_error) = self.schema.validate(&self.values) {
            tracing::debug!(field = %field_error.field, "Profile form rejected");
            self.error = Some(field_error.clone());
            return Err(field_error.into());
        }

        let input = ProfileInput {
            id: self.values.text("id").to_string(),
            name: self.values.text("name").to_string(),
            email: self.values.text("email").to_string(),
            contact_number: self.values.text("contactNumber").to_string(),
            country_code: self.values.text("countryCode").to_string(),
            password: self.values.text("password").to_string(),
        };

        match self.service.save(input) {
            Ok(profile) => {
                self.values = Self::values_from(&profile);
                self.editable = false;
                Ok(profile)
            }
            Err(err) => {
                self.error = FieldError::from_app_error(&err);
                Err(err)
            }
        }
    }

    fn ensure_editable(&self) -> AppResult<()> {
        if self.editable {
            Ok(())
        } else {
            Err(AppError::invalid_request("Profile is read-only, press edit first"))
        }
    }
}
