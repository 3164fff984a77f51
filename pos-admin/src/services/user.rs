//! User Service

use shared::error::{AppResult, ErrorCode};
use shared::models::{User, UserInput};

use super::{CrudService, append_record, ensure_unique_name, remove_record, require_record, replace_record};
use crate::store::EntityStore;
use crate::utils::messages;
use crate::utils::validation::validate_required_text;

/// Staff account collection (员工账号)
#[derive(Debug, Clone)]
pub struct UserService {
    store: EntityStore<User>,
}

impl UserService {
    pub fn new(store: EntityStore<User>) -> Self {
        Self { store }
    }

    fn validate(input: &mut UserInput) -> AppResult<()> {
        input.name = input.name.trim().to_string();
        validate_required_text(&input.name, "name", messages::NAME_REQUIRED)?;
        validate_required_text(&input.password, "password", messages::PASSWORD_REQUIRED)
    }
}

impl CrudService for UserService {
    type Record = User;
    type Input = UserInput;

    const LABEL: &'static str = "User";

    fn store(&self) -> &EntityStore<User> {
        &self.store
    }

    fn create(&self, mut input: UserInput) -> AppResult<User> {
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, None, ErrorCode::UserNameExists)?;

        let user = append_record(&self.store, User::from_input(self.store.next_id(), input));
        tracing::info!(id = %user.id, name = %user.name, role = %user.role, "User created");
        Ok(user)
    }

    fn update(&self, id: &str, mut input: UserInput) -> AppResult<User> {
        require_record(&self.store, id, ErrorCode::UserNotFound)?;
        Self::validate(&mut input)?;
        ensure_unique_name(&self.store.get(), &input.name, Some(id), ErrorCode::UserNameExists)?;

        let user = replace_record(&self.store, User::from_input(id, input), ErrorCode::UserNotFound)?;
        tracing::info!(id = %user.id, name = %user.name, role = %user.role, "User updated");
        Ok(user)
    }

    fn delete(&self, id: &str) -> AppResult<User> {
        let removed = remove_record(&self.store, id, ErrorCode::UserNotFound)?;
        tracing::info!(id, name = %removed.name, "User deleted");
        Ok(removed)
    }
}
