//! Form controller - one create/edit form bound to one collection service
//!
//! Lifecycle: `open_create` / `open_edit` → field edits → `submit` or
//! `cancel`. A submit first runs the schema, then hands the payload to the
//! service, whose uniqueness and reference checks run against the current
//! collection. Any failure marks a single field and leaves the store as is.

use std::marker::PhantomData;

use shared::error::{AppError, AppResult};

use super::entities::{EntityForm, ItemForm, RecordOf};
use super::schema::{FieldError, FormSchema, FormValues};
use crate::core::Config;
use crate::image::ImageData;
use crate::services::CrudService;
use crate::store::Record;

/// Whether the form is shown, and for which record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Closed,
    Create,
    Edit { id: String },
}

pub struct FormController<F: EntityForm> {
    service: F::Service,
    schema: FormSchema,
    defaults: FormValues,
    mode: FormMode,
    values: FormValues,
    /// Marked field of the last rejected submit
    error: Option<FieldError>,
    /// Rejection that names no field (record vanished, ...)
    form_error: Option<String>,
    _form: PhantomData<F>,
}

impl<F: EntityForm> FormController<F> {
    pub fn new(service: F::Service, config: &Config) -> Self {
        let defaults = F::defaults(config);
        Self {
            service,
            schema: F::schema(),
            values: defaults.clone(),
            defaults,
            mode: FormMode::Closed,
            error: None,
            form_error: None,
            _form: PhantomData,
        }
    }

    pub fn service(&self) -> &F::Service {
        &self.service
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Id of the record being edited
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            _ => None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Open an empty form
    pub fn open_create(&mut self) {
        self.reset();
        self.mode = FormMode::Create;
    }

    /// Open the form prefilled from record `id`
    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        let record = self
            .service
            .find(id)
            .ok_or_else(|| AppError::not_found(<RecordOf<F> as Record>::RESOURCE))?;
        self.reset();
        self.values = F::values_from(&record);
        self.mode = FormMode::Edit { id: id.to_string() };
        Ok(())
    }

    /// Close the form and discard its values
    pub fn cancel(&mut self) {
        self.reset();
        self.mode = FormMode::Closed;
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.values.set_text(field, value);
        self.clear_error_on(field);
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.values.set_flag(field, value);
        self.clear_error_on(field);
    }

    /// Append a row to a list field (item choices)
    pub fn add_row(&mut self, field: &str, row: FormValues) {
        self.values.push_row(field, row);
    }

    pub fn remove_row(&mut self, field: &str, index: usize) -> bool {
        let removed = self.values.remove_row(field, index);
        if removed {
            self.clear_error_on(field);
        }
        removed
    }

    /// Set `sub` of row `index` in list `field`
    pub fn set_row_text(&mut self, field: &str, index: usize, sub: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let updated = self.values.update_row(field, index, |row| row.set_text(sub, value));
        if updated {
            self.clear_error_on(&format!("{field}.{index}.{sub}"));
        }
        updated
    }

    /// Store a loaded image on the form; `None` clears both image fields
    pub fn apply_image(&mut self, image: Option<ImageData>) {
        match image {
            Some(image) => {
                self.values.set_text("image", image.data_uri);
                self.values.set_text("imageName", image.file_name);
            }
            None => {
                self.values.set_text("image", "");
                self.values.set_text("imageName", "");
            }
        }
    }

    /// Validate and commit
    ///
    /// On success the form closes and the committed record is returned.
    pub fn submit(&mut self) -> AppResult<RecordOf<F>> {
        if !self.is_open() {
            return Err(AppError::invalid_request("Form is not open"));
        }
        self.error = None;
        self.form_error = None;

        let input = match self
            .schema
            .validate(&self.values)
            .and_then(|valid| F::build(&valid))
        {
            Ok(input) => input,
            Err(field_error) => {
                tracing::debug!(
                    resource = <RecordOf<F> as Record>::RESOURCE,
                    field = %field_error.field,
                    message = %field_error.message,
                    "Form rejected"
                );
                self.error = Some(field_error.clone());
                return Err(field_error.into());
            }
        };

        let result = match &self.mode {
            FormMode::Edit { id } => self.service.update(id, input),
            _ => self.service.create(input),
        };

        match result {
            Ok(record) => {
                self.cancel();
                Ok(record)
            }
            Err(err) => {
                match FieldError::from_app_error(&err) {
                    Some(field_error) => self.error = Some(field_error),
                    None => self.form_error = Some(err.message.clone()),
                }
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.error = None;
        self.form_error = None;
    }

    fn clear_error_on(&mut self, field: &str) {
        if self.error.as_ref().is_some_and(|e| e.field == field) {
            self.error = None;
        }
    }
}

impl FormController<ItemForm> {
    /// Append a blank choice row
    pub fn add_choice(&mut self) {
        self.add_row("choices", ItemForm::empty_choice());
    }

    pub fn remove_choice(&mut self, index: usize) -> bool {
        self.remove_row("choices", index)
    }

    pub fn set_choice(&mut self, index: usize, name: impl Into<String>, price: impl Into<String>) -> bool {
        self.set_row_text("choices", index, "name", name) && self.set_row_text("choices", index, "price", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::entities::{CategoryForm, ItemForm, TableForm};
    use crate::services::{CategoryService, DiningTableService, ItemService};
    use crate::store::EntityStore;
    use shared::error::ErrorCode;
    use shared::models::{Category, default_categories};

    fn category_form(names: &[&str]) -> FormController<CategoryForm> {
        let records = names
            .iter()
            .enumerate()
            .map(|(i, n)| Category {
                id: (i + 1).to_string(),
                name: n.to_string(),
            })
            .collect();
        let service = CategoryService::new(EntityStore::with_records(records), EntityStore::new());
        FormController::new(service, &Config::default())
    }

    #[test]
    fn test_duplicate_category_marks_name() {
        let mut form = category_form(&["Dishes", "Drinks"]);
        form.open_create();
        form.set_text("name", "dishes");

        let err = form.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNameExists);
        assert_eq!(form.error().unwrap().field, "name");
        assert_eq!(form.error().unwrap().message, "Category name already exists.");
        assert!(form.is_open());
        assert_eq!(form.service().list().len(), 2);

        form.set_text("name", "Snacks");
        assert!(form.error().is_none());
        let created = form.submit().unwrap();
        assert_eq!(created.name, "Snacks");
        assert_eq!(form.service().list().len(), 3);
        assert!(!form.is_open());
    }

    #[test]
    fn test_edit_unmodified_succeeds() {
        let mut form = category_form(&["Dishes", "Drinks"]);
        form.open_edit("2").unwrap();
        assert_eq!(form.editing_id(), Some("2"));
        assert_eq!(form.values().text("name"), "Drinks");

        let record = form.submit().unwrap();
        assert_eq!(record.id, "2");
        assert_eq!(form.service().list().len(), 2);
    }

    #[test]
    fn test_open_edit_missing_record() {
        let mut form = category_form(&["Dishes"]);
        let err = form.open_edit("42").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(!form.is_open());
    }

    #[test]
    fn test_submit_closed_form() {
        let mut form = category_form(&[]);
        assert!(form.submit().is_err());
    }

    #[test]
    fn test_table_seats_zero_then_one() {
        let mut form: FormController<TableForm> =
            FormController::new(DiningTableService::new(EntityStore::new()), &Config::default());
        form.open_create();
        assert_eq!(form.values().text("seats"), "1");

        form.set_text("name", "T1");
        form.set_text("seats", "0");
        let err = form.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(form.error().unwrap().field, "seats");
        assert!(form.service().list().is_empty());

        form.set_text("seats", "1");
        assert!(form.submit().is_ok());
        assert_eq!(form.service().list().len(), 1);
    }

    #[test]
    fn test_item_choices_and_image() {
        let service = ItemService::new(
            EntityStore::new(),
            EntityStore::with_records(default_categories()),
            true,
        );
        let mut form: FormController<ItemForm> = FormController::new(service, &Config::default());
        form.open_create();
        form.set_text("name", "Teh Tarik");
        form.set_text("price", "3.50");
        form.set_text("category", "2");
        form.set_flag("selection", true);
        form.add_choice();
        form.apply_image(Some(ImageData {
            data_uri: "data:image/png;base64,AAAA".to_string(),
            file_name: "teh.png".to_string(),
        }));

        let err = form.submit().unwrap_err();
        assert_eq!(err.field(), Some("choices.0.name"));

        assert!(form.set_choice(0, "Iced", "0.50"));
        form.add_choice();
        assert!(form.remove_choice(1));
        assert!(!form.remove_choice(5));
        let item = form.submit().unwrap();
        assert_eq!(item.choices.len(), 1);
        assert_eq!(item.image_name.as_deref(), Some("teh.png"));
    }

    #[test]
    fn test_item_unknown_category_marks_field() {
        let service = ItemService::new(
            EntityStore::new(),
            EntityStore::with_records(default_categories()),
            true,
        );
        let mut form: FormController<ItemForm> = FormController::new(service, &Config::default());
        form.open_create();
        form.set_text("name", "Ghost");
        form.set_text("price", "1");
        form.set_text("category", "99");

        form.submit().unwrap_err();
        assert_eq!(form.error().unwrap().field, "category");
        assert_eq!(form.error().unwrap().message, "Selected category does not exist");
    }

    #[test]
    fn test_cancel_resets_values() {
        let mut form = category_form(&[]);
        form.open_create();
        form.set_text("name", "Draft");
        form.cancel();
        assert!(!form.is_open());
        assert_eq!(form.values().text("name"), "");

        form.apply_image(None);
        assert_eq!(form.values().text("imageName"), "");
    }
}
