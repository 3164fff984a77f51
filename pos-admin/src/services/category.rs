//! Category Service

use shared::error::{AppResult, ErrorCode};
use shared::models::{Category, CategoryInput, Item};

use super::{CrudService, append_record, ensure_unique_name, remove_record, require_record, replace_record};
use crate::store::EntityStore;
use crate::utils::messages;
use crate::utils::validation::validate_required_text;

/// Category collection (菜品分类)
#[derive(Debug, Clone)]
pub struct CategoryService {
    store: EntityStore<Category>,
    /// Items are only read, to report references left dangling by a delete
    items: EntityStore<Item>,
}

impl CategoryService {
    pub fn new(store: EntityStore<Category>, items: EntityStore<Item>) -> Self {
        Self { store, items }
    }

    fn validate(input: &mut CategoryInput) -> AppResult<()> {
        input.name = input.name.trim().to_string();
        validate_required_text(&input.name, "name", messages::CATEGORY_NAME_REQUIRED)
    }
}

impl CrudService for CategoryService {
    type Record = Category;
    type Input = CategoryInput;

    const LABEL: &'static str = "Category";

    fn store(&self) -> &EntityStore<Category> {
        &self.store
    }

    fn create(&self, mut input: CategoryInput) -> AppResult<Category> {
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, None, ErrorCode::CategoryNameExists)?;

        let category = append_record(&self.store, Category::from_input(self.store.next_id(), input));
        tracing::info!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    fn update(&self, id: &str, mut input: CategoryInput) -> AppResult<Category> {
        require_record(&self.store, id, ErrorCode::CategoryNotFound)?;
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, Some(id), ErrorCode::CategoryNameExists)?;

        let category = replace_record(
            &self.store,
            Category::from_input(id, input),
            ErrorCode::CategoryNotFound,
        )?;
        tracing::info!(id = %category.id, name = %category.name, "Category updated");
        Ok(category)
    }

    fn delete(&self, id: &str) -> AppResult<Category> {
        let removed = remove_record(&self.store, id, ErrorCode::CategoryNotFound)?;

        // Items keep their reference; they stay visible under the "all" tab only
        let dangling = self.items.get().iter().filter(|i| i.category == id).count();
        if dangling > 0 {
            tracing::warn!(id, name = %removed.name, dangling, "Category deleted while items still reference it");
        }
        tracing::info!(id, name = %removed.name, "Category deleted");
        Ok(removed)
    }
}
