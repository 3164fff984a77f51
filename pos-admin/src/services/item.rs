//! Item Service

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, Item, ItemInput};

use super::{CrudService, append_record, ensure_unique_name, remove_record, require_record, replace_record};
use crate::store::EntityStore;
use crate::utils::messages;
use crate::utils::validation::{validate_min_decimal, validate_required_text};

/// Menu item collection (菜品)
#[derive(Debug, Clone)]
pub struct ItemService {
    store: EntityStore<Item>,
    categories: EntityStore<Category>,
    /// Reject items whose category id is not in the category store
    enforce_category: bool,
}

impl ItemService {
    pub fn new(store: EntityStore<Item>, categories: EntityStore<Category>, enforce_category: bool) -> Self {
        Self {
            store,
            categories,
            enforce_category,
        }
    }

    /// Items shown under a category tab
    pub fn by_category(&self, category_id: &str) -> Vec<Item> {
        self.store
            .get()
            .iter()
            .filter(|i| i.category == category_id)
            .cloned()
            .collect()
    }

    fn validate(&self, input: &mut ItemInput) -> AppResult<()> {
        input.name = input.name.trim().to_string();
        validate_required_text(&input.name, "name", messages::ITEM_NAME_REQUIRED)?;
        validate_min_decimal(input.price, Decimal::ZERO, "price", messages::PRICE_MIN)?;
        validate_required_text(&input.category, "category", messages::ITEM_CATEGORY_REQUIRED)?;

        if input.selection {
            for (index, choice) in input.choices.iter_mut().enumerate() {
                choice.name = choice.name.trim().to_string();
                validate_required_text(
                    &choice.name,
                    &format!("choices.{index}.name"),
                    messages::CHOICE_NAME_REQUIRED,
                )?;
                validate_min_decimal(
                    choice.price,
                    Decimal::ZERO,
                    &format!("choices.{index}.price"),
                    messages::PRICE_MIN,
                )?;
            }
        }
        Ok(())
    }

    fn check_category(&self, category_id: &str) -> AppResult<()> {
        if self.enforce_category && !self.categories.contains(category_id) {
            tracing::debug!(category = category_id, "Item references unknown category");
            let code = ErrorCode::ItemCategoryInvalid;
            return Err(AppError::for_field(code, "category", code.message()));
        }
        Ok(())
    }
}

impl CrudService for ItemService {
    type Record = Item;
    type Input = ItemInput;

    const LABEL: &'static str = "Item";

    fn store(&self) -> &EntityStore<Item> {
        &self.store
    }

    fn create(&self, mut input: ItemInput) -> AppResult<Item> {
        self.validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, None, ErrorCode::ItemNameExists)?;
        self.check_category(&input.category)?;

        let item = append_record(&self.store, Item::from_input(self.store.next_id(), input));
        tracing::info!(id = %item.id, name = %item.name, category = %item.category, "Item created");
        Ok(item)
    }

    fn update(&self, id: &str, mut input: ItemInput) -> AppResult<Item> {
        let existing = require_record(&self.store, id, ErrorCode::ItemNotFound)?;
        self.validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, Some(id), ErrorCode::ItemNameExists)?;
        // A reference left dangling by a category delete stays saveable
        if input.category != existing.category {
            self.check_category(&input.category)?;
        }

        let item = replace_record(&self.store, Item::from_input(id, input), ErrorCode::ItemNotFound)?;
        tracing::info!(id = %item.id, name = %item.name, "Item updated");
        Ok(item)
    }

    fn delete(&self, id: &str) -> AppResult<Item> {
        let removed = remove_record(&self.store, id, ErrorCode::ItemNotFound)?;
        tracing::info!(id, name = %removed.name, "Item deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ItemChoice, default_categories};

    fn service(enforce: bool) -> ItemService {
        ItemService::new(
            EntityStore::new(),
            EntityStore::with_records(default_categories()),
            enforce,
        )
    }

    fn latte() -> ItemInput {
        ItemInput {
            name: "Latte".to_string(),
            price: Decimal::new(850, 2),
            category: "2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_item() {
        let service = service(true);
        let item = service.create(latte()).unwrap();
        assert_eq!(item.price, Decimal::new(850, 2));
        assert_eq!(service.by_category("2").len(), 1);
        assert!(service.by_category("1").is_empty());
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        let service = service(true);
        service.create(latte()).unwrap();

        let mut again = latte();
        again.name = "LATTE".to_string();
        let err = service.create(again).unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNameExists);
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_negative_price_rejected() {
        let service = service(true);
        let mut input = latte();
        input.price = Decimal::new(-1, 0);
        let err = service.create(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "Price must be at least 0");
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_unknown_category() {
        let mut input = latte();
        input.category = "404".to_string();

        let err = service(true).create(input.clone()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemCategoryInvalid);
        assert_eq!(err.field(), Some("category"));

        // Accepted when the reference check is switched off
        assert!(service(false).create(input).is_ok());
    }

    #[test]
    fn test_update_with_dangling_category() {
        let categories = EntityStore::with_records(default_categories());
        let service = ItemService::new(EntityStore::new(), categories.clone(), true);
        let item = service.create(latte()).unwrap();

        categories.replace(
            default_categories()
                .into_iter()
                .filter(|c| c.id != "2")
                .collect(),
        );

        // Unchanged reference: saved as is
        let updated = service.update(&item.id, latte()).unwrap();
        assert_eq!(updated.category, "2");

        // Switching to another unknown category is still rejected
        let mut moved = latte();
        moved.category = "404".to_string();
        let err = service.update(&item.id, moved).unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemCategoryInvalid);
    }

    #[test]
    fn test_choice_validation_only_with_selection() {
        let service = service(true);
        let mut input = latte();
        input.choices = vec![ItemChoice {
            name: String::new(),
            price: Decimal::ONE,
        }];

        // Ignored and dropped while selection is off
        let item = service.create(input.clone()).unwrap();
        assert!(item.choices.is_empty());

        input.name = "Mocha".to_string();
        input.selection = true;
        let err = service.create(input).unwrap_err();
        assert_eq!(err.field(), Some("choices.0.name"));
        assert_eq!(err.message, "Choice name is required");
    }

    #[test]
    fn test_update_keeps_id() {
        let service = service(true);
        let item = service.create(latte()).unwrap();

        let mut input = latte();
        input.price = Decimal::new(900, 2);
        let updated = service.update(&item.id, input).unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(service.list().len(), 1);
        assert_eq!(service.find(&item.id).unwrap().price, Decimal::new(900, 2));
    }
}
