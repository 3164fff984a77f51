//! Dining Table Service

use shared::error::{AppResult, ErrorCode};
use shared::models::{DiningTable, DiningTableInput};

use super::{CrudService, append_record, ensure_unique_name, remove_record, require_record, replace_record};
use crate::store::EntityStore;
use crate::utils::messages;
use crate::utils::validation::{validate_min_count, validate_required_text};

/// Minimum seats per table
pub const MIN_SEATS: u32 = 1;

/// Dining table collection (桌台)
#[derive(Debug, Clone)]
pub struct DiningTableService {
    store: EntityStore<DiningTable>,
}

impl DiningTableService {
    pub fn new(store: EntityStore<DiningTable>) -> Self {
        Self { store }
    }

    /// Total seats across all tables
    pub fn total_seats(&self) -> u64 {
        self.store.get().iter().map(|t| u64::from(t.seats)).sum()
    }

    fn validate(input: &mut DiningTableInput) -> AppResult<()> {
        input.name = input.name.trim().to_string();
        validate_required_text(&input.name, "name", messages::TABLE_NAME_REQUIRED)?;
        validate_min_count(input.seats, MIN_SEATS, "seats", messages::SEATS_MIN)
    }
}

impl CrudService for DiningTableService {
    type Record = DiningTable;
    type Input = DiningTableInput;

    const LABEL: &'static str = "Table";

    fn store(&self) -> &EntityStore<DiningTable> {
        &self.store
    }

    fn create(&self, mut input: DiningTableInput) -> AppResult<DiningTable> {
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, None, ErrorCode::TableNameExists)?;

        let table = append_record(&self.store, DiningTable::from_input(self.store.next_id(), input));
        tracing::info!(id = %table.id, name = %table.name, seats = table.seats, "Table created");
        Ok(table)
    }

    fn update(&self, id: &str, mut input: DiningTableInput) -> AppResult<DiningTable> {
        require_record(&self.store, id, ErrorCode::TableNotFound)?;
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, Some(id), ErrorCode::TableNameExists)?;

        let table = replace_record(
            &self.store,
            DiningTable::from_input(id, input),
            ErrorCode::TableNotFound,
        )?;
        tracing::info!(id = %table.id, name = %table.name, seats = table.seats, "Table updated");
        Ok(table)
    }

    fn delete(&self, id: &str) -> AppResult<DiningTable> {
        let removed = remove_record(&self.store, id, ErrorCode::TableNotFound)?;
        tracing::info!(id, name = %removed.name, "Table deleted");
        Ok(removed)
    }
}
