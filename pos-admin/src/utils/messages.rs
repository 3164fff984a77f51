//! User-facing validation messages
//!
//! Shared by the form schemas and the services so that a rejected intent
//! reads the same whether it came from a form or from raw JSON.

// ── Category ────────────────────────────────────────────────────────
pub const CATEGORY_NAME_REQUIRED: &str = "Category name is required";

// ── Item ────────────────────────────────────────────────────────────
pub const ITEM_NAME_REQUIRED: &str = "Item name is required";
pub const PRICE_REQUIRED: &str = "Please enter a price";
pub const PRICE_NOT_NUMBER: &str = "Price must be a number";
pub const PRICE_MIN: &str = "Price must be at least 0";
pub const ITEM_CATEGORY_REQUIRED: &str = "Category is required";
pub const CHOICE_NAME_REQUIRED: &str = "Choice name is required";

// ── Table ───────────────────────────────────────────────────────────
pub const TABLE_NAME_REQUIRED: &str = "Table name is required";
pub const SEATS_REQUIRED: &str = "Please enter a number";
pub const SEATS_NOT_NUMBER: &str = "Seats must be a number";
pub const SEATS_MIN: &str = "Number of seats must be at least 1";

// ── Outlet / User / Profile ─────────────────────────────────────────
pub const NAME_REQUIRED: &str = "Name is required";
pub const BUSINESS_REG_NO_REQUIRED: &str = "Business Registration Number is required";
pub const TRADING_LICENSE_REQUIRED: &str = "Trading License is required";
pub const ADDRESS1_REQUIRED: &str = "Address 1 is required";
pub const POSTCODE_REQUIRED: &str = "Postcode is required";
pub const STATE_REQUIRED: &str = "State is required";
pub const CONTACT_NUMBER_REQUIRED: &str = "Contact Number is required";
pub const COUNTRY_CODE_REQUIRED: &str = "Country Code is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const ROLE_REQUIRED: &str = "Role is required";
pub const ROLE_INVALID: &str = "Role must be one of Admin, Staff, Owner";
pub const PASSWORD_REQUIRED: &str = "Password is required";

// ── Profile password strength ───────────────────────────────────────
pub const PASSWORD_MIN_LEN: usize = 12;
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 12 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least one special character";

// ── List empty states ───────────────────────────────────────────────
pub const EMPTY_CATEGORIES: &str = "There is no categories, please set it now.";
pub const EMPTY_TABLES: &str = "Please create tables.";
pub const EMPTY_OUTLETS: &str = "There is no outlet, please set it now.";
pub const EMPTY_USERS: &str = "There are no users, please add a user.";
pub const EMPTY_ITEM_TABS: &str = "Please create categories.";

// ── Deletion prompt ─────────────────────────────────────────────────
pub const DELETE_PROMPT_TITLE: &str = "Are you sure?";
pub const DELETE_PROMPT_BODY: &str = "This action cannot be undone.";
