//! Form definitions for each collection screen
//!
//! Each form pairs a schema with the conversions between a record, the raw
//! form values and the service payload.

use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::{
    Category, CategoryInput, DiningTable, DiningTableInput, Item, ItemChoice, ItemInput, Outlet,
    OutletInput, Role, User, UserInput,
};

use super::schema::{FieldError, FieldSchema, FormSchema, FormValues, Rule, ValidValues};
use crate::core::Config;
use crate::services::{
    CategoryService, CrudService, DiningTableService, ItemService, OutletService, UserService,
};
use crate::utils::messages;

/// Record type edited by form `F`
pub type RecordOf<F> = <<F as EntityForm>::Service as CrudService>::Record;
/// Payload type produced by form `F`
pub type InputOf<F> = <<F as EntityForm>::Service as CrudService>::Input;

/// Role names accepted by the user form
pub const ROLE_NAMES: &[&str] = &["Admin", "Staff", "Owner"];

/// Binds a schema to one collection service
pub trait EntityForm: Sized {
    type Service: CrudService + Clone;

    fn schema() -> FormSchema;

    /// Values of a freshly opened create form
    fn defaults(config: &Config) -> FormValues;

    /// Values of an edit form prefilled from `record`
    fn values_from(record: &RecordOf<Self>) -> FormValues;

    /// Payload from values that passed [`EntityForm::schema`]
    fn build(values: &ValidValues) -> Result<InputOf<Self>, FieldError>;
}

// =============================================================================
// Category
// =============================================================================

pub struct CategoryForm;

impl EntityForm for CategoryForm {
    type Service = CategoryService;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::CATEGORY_NAME_REQUIRED),
        ])
    }

    fn defaults(_config: &Config) -> FormValues {
        FormValues::new().with_text("name", "")
    }

    fn values_from(record: &Category) -> FormValues {
        FormValues::new().with_text("name", record.name.as_str())
    }

    fn build(values: &ValidValues) -> Result<CategoryInput, FieldError> {
        Ok(CategoryInput {
            name: values.text("name"),
        })
    }
}

// =============================================================================
// Item
// =============================================================================

pub struct ItemForm;

fn price_field(name: &'static str) -> FieldSchema {
    FieldSchema::decimal(name, messages::PRICE_NOT_NUMBER)
        .required(messages::PRICE_REQUIRED)
        .rule(Rule::MinDecimal(Decimal::ZERO, messages::PRICE_MIN))
}

impl ItemForm {
    /// Blank row appended by "add choice"
    pub fn empty_choice() -> FormValues {
        FormValues::new().with_text("name", "").with_text("price", "")
    }
}

impl EntityForm for ItemForm {
    type Service = ItemService;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::ITEM_NAME_REQUIRED),
            price_field("price"),
            FieldSchema::text("category").required(messages::ITEM_CATEGORY_REQUIRED),
            FieldSchema::text("image"),
            FieldSchema::text("imageName"),
            FieldSchema::flag("selection"),
            FieldSchema::list(
                "choices",
                vec![
                    FieldSchema::text("name").required(messages::CHOICE_NAME_REQUIRED),
                    price_field("price"),
                ],
            )
            .when("selection"),
        ])
    }

    fn defaults(_config: &Config) -> FormValues {
        FormValues::new()
            .with_text("name", "")
            .with_text("price", "")
            .with_text("category", "")
            .with_flag("selection", false)
    }

    fn values_from(record: &Item) -> FormValues {
        let mut values = FormValues::new()
            .with_text("name", record.name.as_str())
            .with_text("price", record.price.to_string())
            .with_text("category", record.category.as_str())
            .with_text("image", record.image.clone().unwrap_or_default())
            .with_text("imageName", record.image_name.clone().unwrap_or_default())
            .with_flag("selection", record.selection);
        let rows = record
            .choices
            .iter()
            .map(|c| {
                FormValues::new()
                    .with_text("name", c.name.as_str())
                    .with_text("price", c.price.to_string())
            })
            .collect();
        values.set_list("choices", rows);
        values
    }

    fn build(values: &ValidValues) -> Result<ItemInput, FieldError> {
        let choices = values
            .list("choices")
            .iter()
            .map(|row| ItemChoice {
                name: row.text("name").trim().to_string(),
                price: row.decimal("price"),
            })
            .collect();
        Ok(ItemInput {
            name: values.text("name"),
            price: values.decimal("price"),
            category: values.text("category"),
            image: values.optional_text("image"),
            image_name: values.optional_text("imageName"),
            selection: values.flag("selection"),
            choices,
        })
    }
}

// =============================================================================
// Dining table
// =============================================================================

pub struct TableForm;

impl EntityForm for TableForm {
    type Service = DiningTableService;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::TABLE_NAME_REQUIRED),
            FieldSchema::integer("seats", messages::SEATS_NOT_NUMBER)
                .required(messages::SEATS_REQUIRED)
                .rule(Rule::MinInteger(1, messages::SEATS_MIN)),
        ])
    }

    fn defaults(_config: &Config) -> FormValues {
        let blank = DiningTableInput::default();
        FormValues::new()
            .with_text("name", blank.name)
            .with_text("seats", blank.seats.to_string())
    }

    fn values_from(record: &DiningTable) -> FormValues {
        FormValues::new()
            .with_text("name", record.name.as_str())
            .with_text("seats", record.seats.to_string())
    }

    fn build(values: &ValidValues) -> Result<DiningTableInput, FieldError> {
        let seats = u32::try_from(values.integer("seats"))
            .map_err(|_| FieldError::new("seats", ErrorCode::TypeMismatch, messages::SEATS_NOT_NUMBER))?;
        Ok(DiningTableInput {
            name: values.text("name"),
            seats,
        })
    }
}

// =============================================================================
// Outlet
// =============================================================================

pub struct OutletForm;

impl EntityForm for OutletForm {
    type Service = OutletService;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::NAME_REQUIRED),
            FieldSchema::text("businessRegNo").required(messages::BUSINESS_REG_NO_REQUIRED),
            FieldSchema::text("tradingLicense").required(messages::TRADING_LICENSE_REQUIRED),
            FieldSchema::text("address1").required(messages::ADDRESS1_REQUIRED),
            FieldSchema::text("address2"),
            FieldSchema::text("address3"),
            FieldSchema::text("postcode").required(messages::POSTCODE_REQUIRED),
            FieldSchema::text("state").required(messages::STATE_REQUIRED),
            FieldSchema::text("contactNumber").required(messages::CONTACT_NUMBER_REQUIRED),
            FieldSchema::text("countryCode").required(messages::COUNTRY_CODE_REQUIRED),
            FieldSchema::text("email")
                .required(messages::EMAIL_REQUIRED)
                .rule(Rule::Email(messages::EMAIL_INVALID)),
            FieldSchema::text("image"),
        ])
    }

    fn defaults(config: &Config) -> FormValues {
        ["name", "businessRegNo", "tradingLicense", "address1", "address2", "address3", "postcode", "state", "contactNumber", "email"]
            .into_iter()
            .fold(FormValues::new(), |values, field| values.with_text(field, ""))
            .with_text("countryCode", config.default_country_code.as_str())
    }

    fn values_from(record: &Outlet) -> FormValues {
        FormValues::new()
            .with_text("name", record.name.as_str())
            .with_text("businessRegNo", record.business_reg_no.as_str())
            .with_text("tradingLicense", record.trading_license.as_str())
            .with_text("address1", record.address1.as_str())
            .with_text("address2", record.address2.clone().unwrap_or_default())
            .with_text("address3", record.address3.clone().unwrap_or_default())
            .with_text("postcode", record.postcode.as_str())
            .with_text("state", record.state.as_str())
            .with_text("contactNumber", record.contact_number.as_str())
            .with_text("countryCode", record.country_code.as_str())
            .with_text("email", record.email.as_str())
            .with_text("image", record.image.clone().unwrap_or_default())
    }

    fn build(values: &ValidValues) -> Result<OutletInput, FieldError> {
        Ok(OutletInput {
            name: values.text("name"),
            business_reg_no: values.text("businessRegNo"),
            trading_license: values.text("tradingLicense"),
            address1: values.text("address1"),
            address2: values.optional_text("address2"),
            address3: values.optional_text("address3"),
            postcode: values.text("postcode"),
            state: values.text("state"),
            contact_number: values.text("contactNumber"),
            country_code: values.text("countryCode"),
            email: values.text("email"),
            image: values.optional_text("image"),
        })
    }
}

// =============================================================================
// User
// =============================================================================

pub struct UserForm;

impl EntityForm for UserForm {
    type Service = UserService;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required(messages::NAME_REQUIRED),
            FieldSchema::text("role")
                .required(messages::ROLE_REQUIRED)
                .rule(Rule::OneOf(ROLE_NAMES, messages::ROLE_INVALID)),
            FieldSchema::text("password").required(messages::PASSWORD_REQUIRED),
            FieldSchema::text("image"),
            FieldSchema::text("imageName"),
        ])
    }

    fn defaults(_config: &Config) -> FormValues {
        FormValues::new()
            .with_text("name", "")
            .with_text("role", "")
            .with_text("password", "")
    }

    fn values_from(record: &User) -> FormValues {
        FormValues::new()
            .with_text("name", record.name.as_str())
            .with_text("role", record.role.as_str())
            .with_text("password", record.password.as_str())
            .with_text("image", record.image.clone().unwrap_or_default())
            .with_text("imageName", record.image_name.clone().unwrap_or_default())
    }

    fn build(values: &ValidValues) -> Result<UserInput, FieldError> {
        let role: Role = values
            .text("role")
            .trim()
            .parse()
            .map_err(|_| FieldError::new("role", ErrorCode::InvalidRole, messages::ROLE_INVALID))?;
        Ok(UserInput {
            name: values.text("name"),
            role,
            password: values.text("password"),
            image: values.optional_text("image"),
            image_name: values.optional_text("imageName"),
        })
    }
}
