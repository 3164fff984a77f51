//! Outlet Service
//!
//! Outlets have no name-uniqueness rule: two branches may share a trading name.

use shared::error::{AppResult, ErrorCode};
use shared::models::{Outlet, OutletInput};

use super::{CrudService, append_record, remove_record, require_record, replace_record};
use crate::store::EntityStore;
use crate::utils::messages;
use crate::utils::validation::{validate_email, validate_required_text};

/// Outlet collection (门店)
#[derive(Debug, Clone)]
pub struct OutletService {
    store: EntityStore<Outlet>,
}

impl OutletService {
    pub fn new(store: EntityStore<Outlet>) -> Self {
        Self { store }
    }

    fn validate(input: &mut OutletInput) -> AppResult<()> {
        input.name = input.name.trim().to_string();
        input.email = input.email.trim().to_string();

        validate_required_text(&input.name, "name", messages::NAME_REQUIRED)?;
        validate_required_text(
            &input.business_reg_no,
            "businessRegNo",
            messages::BUSINESS_REG_NO_REQUIRED,
        )?;
        validate_required_text(
            &input.trading_license,
            "tradingLicense",
            messages::TRADING_LICENSE_REQUIRED,
        )?;
        validate_required_text(&input.address1, "address1", messages::ADDRESS1_REQUIRED)?;
        validate_required_text(&input.postcode, "postcode", messages::POSTCODE_REQUIRED)?;
        validate_required_text(&input.state, "state", messages::STATE_REQUIRED)?;
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
        validate_email(&input.email, "email")
    }
}

impl CrudService for OutletService {
    type Record = Outlet;
    type Input = OutletInput;

    const LABEL: &'static str = "Outlet";

    fn store(&self) -> &EntityStore<Outlet> {
        &self.store
    }

    fn create(&self, mut input: OutletInput) -> AppResult<Outlet> {
        Self::validate(&mut input)?;

        let outlet = append_record(&self.store, Outlet::from_input(self.store.next_id(), input));
        tracing::info!(id = %outlet.id, name = %outlet.name, "Outlet created");
        Ok(outlet)
    }

    fn update(&self, id: &str, mut input: OutletInput) -> AppResult<Outlet> {
        require_record(&self.store, id, ErrorCode::OutletNotFound)?;
        Self::validate(&mut input)?;

        let outlet = replace_record(&self.store, Outlet::from_input(id, input), ErrorCode::OutletNotFound)?;
        tracing::info!(id = %outlet.id, name = %outlet.name, "Outlet updated");
        Ok(outlet)
    }

    fn delete(&self, id: &str) -> AppResult<Outlet> {
        let removed = remove_record(&self.store, id, ErrorCode::OutletNotFound)?;
        tracing::info!(id, name = %removed.name, "Outlet deleted");
        Ok(removed)
    }
}
