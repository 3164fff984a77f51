//! Entity services
//!
//! Each service owns the invariants of one collection: it validates the
//! payload, checks name uniqueness and references, then computes the next
//! collection and replaces the store wholesale.

pub mod category;
pub mod dining_table;
pub mod item;
pub mod outlet;
pub mod profile;
pub mod user;

pub use category::CategoryService;
pub use dining_table::DiningTableService;
pub use item::ItemService;
pub use outlet::OutletService;
pub use profile::ProfileService;
pub use user::UserService;

use std::sync::Arc;

use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::store::{EntityStore, Record};
use crate::utils::validation::same_name;

/// Create / update / delete at the store boundary
pub trait CrudService {
    type Record: Record + Serialize;
    type Input;

    /// Display label used in results ("Category", "Table", ...)
    const LABEL: &'static str;

    fn store(&self) -> &EntityStore<Self::Record>;

    fn create(&self, input: Self::Input) -> AppResult<Self::Record>;

    fn update(&self, id: &str, input: Self::Input) -> AppResult<Self::Record>;

    fn delete(&self, id: &str) -> AppResult<Self::Record>;

    /// Current collection snapshot
    fn list(&self) -> Arc<Vec<Self::Record>> {
        self.store().get()
    }

    fn find(&self, id: &str) -> Option<Self::Record> {
        self.store().find(id)
    }
}

/// Reject `name` when another record already uses it (case-insensitive).
///
/// `exclude` is the id of the record being edited.
pub(crate) fn ensure_unique_name<T: Record>(
    records: &[T],
    name: &str,
    exclude: Option<&str>,
    code: ErrorCode,
) -> AppResult<()> {
    let clash = records
        .iter()
        .filter(|r| Some(r.id()) != exclude)
        .any(|r| same_name(r.name(), name));
    if clash {
        tracing::debug!(resource = T::RESOURCE, name, "Duplicate name rejected");
        return Err(AppError::duplicate(code, "name"));
    }
    Ok(())
}

/// Append a record: new collection = old + record
pub(crate) fn append_record<T: Record>(store: &EntityStore<T>, record: T) -> T {
    let current = store.get();
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend(current.iter().cloned());
    next.push(record.clone());
    store.replace(next);
    record
}

/// Swap the record with the same id: new collection = old mapped
pub(crate) fn replace_record<T: Record>(
    store: &EntityStore<T>,
    record: T,
    not_found: ErrorCode,
) -> AppResult<T> {
    let current = store.get();
    if !current.iter().any(|r| r.id() == record.id()) {
        return Err(AppError::record_not_found(not_found, record.id()));
    }
    let next = current
        .iter()
        .map(|r| {
            if r.id() == record.id() {
                record.clone()
            } else {
                r.clone()
            }
        })
        .collect();
    store.replace(next);
    Ok(record)
}

/// Drop the record with `id`: new collection = old filtered
pub(crate) fn remove_record<T: Record>(
    store: &EntityStore<T>,
    id: &str,
    not_found: ErrorCode,
) -> AppResult<T> {
    let current = store.get();
    let removed = current
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or_else(|| AppError::record_not_found(not_found, id))?;
    let next = current.iter().filter(|r| r.id() != id).cloned().collect();
    store.replace(next);
    Ok(removed)
}

/// Existing record or a not-found error
pub(crate) fn require_record<T: Record>(
    store: &EntityStore<T>,
    id: &str,
    not_found: ErrorCode,
) -> AppResult<T> {
    store
        .find(id)
        .ok_or_else(|| AppError::record_not_found(not_found, id))
}
